use rand::seq::SliceRandom;

/// Canned sample questions per subject, used by the quick-suggestion
/// command.
pub const EDUCATIONAL_TOPICS: &[(&str, &[&str])] = &[
    (
        "mathematics",
        &[
            "Can you explain quadratic equations?",
            "What is calculus used for?",
            "How do I solve systems of linear equations?",
        ],
    ),
    (
        "science",
        &[
            "Can you explain photosynthesis?",
            "How does gravity work?",
            "What is the periodic table?",
        ],
    ),
    (
        "history",
        &[
            "What caused World War II?",
            "Who was Mahatma Gandhi?",
            "Explain the Industrial Revolution",
        ],
    ),
    (
        "literature",
        &[
            "Can you analyze Shakespeare's Hamlet?",
            "What are the themes in To Kill a Mockingbird?",
            "Explain the significance of George Orwell's 1984",
        ],
    ),
    (
        "programming",
        &[
            "How do I learn Python?",
            "Explain object-oriented programming",
            "What is the difference between Java and JavaScript?",
        ],
    ),
];

/// Markdown syntax cheat sheet shown by the help command.
pub const MARKDOWN_EXAMPLES: &[(&str, &str)] = &[
    ("*italic*", "Italic text"),
    ("**bold**", "Bold text"),
    ("# Heading", "Heading (level 1-6)"),
    ("[Link](url)", "Hyperlink"),
    ("`code`", "Inline code"),
    ("```\ncode block\n```", "Code block"),
    ("> quote", "Blockquote"),
    ("- item", "List item"),
    ("1. item", "Numbered list"),
    ("---", "Horizontal rule"),
];

pub fn topic_names() -> impl Iterator<Item = &'static str> {
    EDUCATIONAL_TOPICS.iter().map(|(name, _)| *name)
}

/// Picks a random sample question for the topic, if the topic is known.
pub fn suggest_question(topic: &str) -> Option<&'static str> {
    let topic = topic.to_lowercase();
    let (_, questions) = EDUCATIONAL_TOPICS.iter().find(|(name, _)| *name == topic)?;
    questions.choose(&mut rand::thread_rng()).copied()
}
