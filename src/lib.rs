pub mod backend;
pub mod cli;
pub mod format;
pub mod history;
pub mod models;
pub mod render;
pub mod session;
pub mod topics;
pub mod ui;

use backend::HttpChatBackend;
use cli::Args;
use log::info;
use session::ChatSession;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{ AsyncBufReadExt, BufReader };
use ui::console::ConsoleSurface;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Chat Endpoint: {}", args.chat_url);
    info!("Request Timeout: {}s", args.chat_timeout_secs);
    info!("Typing Simulation: {}", !args.no_typing_delay);
    info!("-------------------------");

    let backend = Arc::new(
        HttpChatBackend::new(args.chat_url.clone(), Duration::from_secs(args.chat_timeout_secs))?
    );
    let surface = Arc::new(ConsoleSurface::new());
    let mut session = ChatSession::new(backend, surface).with_typing_simulation(
        !args.no_typing_delay
    );

    session.greet();
    print_command_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input {
            "/quit" | "/exit" => {
                break;
            }
            "/clear" => session.reset(),
            "/history" => {
                for turn in session.history().snapshot() {
                    println!("  {}: {}", turn.role.as_str(), turn.content);
                }
            }
            "/topics" => {
                for name in topics::topic_names() {
                    println!("  {}", name);
                }
            }
            "/markdown" => print_markdown_help(),
            _ => {
                if let Some(topic) = input.strip_prefix("/suggest") {
                    match topics::suggest_question(topic.trim()) {
                        Some(question) => println!("try asking: {}", question),
                        None => println!("unknown topic; /topics lists the available ones"),
                    }
                } else {
                    session.send(input).await;
                }
            }
        }
    }

    Ok(())
}

fn print_command_help() {
    println!("commands: /topics, /suggest <topic>, /markdown, /history, /clear, /quit");
    println!();
}

fn print_markdown_help() {
    println!("markdown syntax:");
    for (syntax, description) in topics::MARKDOWN_EXAMPLES {
        // Multi-line syntax samples (code fences) print on their own lines.
        if syntax.contains('\n') {
            println!("  {}", description);
            for line in syntax.lines() {
                println!("    {}", line);
            }
        } else {
            println!("  {:<14} {}", syntax, description);
        }
    }
    println!();
}
