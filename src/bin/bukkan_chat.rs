use anyhow::Result;
use mr_bukkan::{
    client::{
        feed_text, parse_line, ChatSession, Command, LineInput, RelayClient, SystemClipboard,
        HELP,
    },
    config::ClientConfig,
    model::{Message, Sender},
};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::from_env();
    let relay = RelayClient::new(config.api_url.clone());
    let mut session = ChatSession::new();
    let mut clipboard = SystemClipboard;

    println!("📖 'Mr Bukkan' - Your Article & Story Writer");
    println!("{}", session.status_line());
    println!("{HELP}\n");
    render(&mut session);
    prompt(&session)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let (text, shifted) = match parse_line(&line) {
            LineInput::Command(Command::Quit) => break,
            LineInput::Command(command) => {
                run_command(command, &mut session, &mut clipboard, &config).await;
                prompt(&session)?;
                continue;
            }
            LineInput::Usage(message) => {
                eprintln!("⚠️ {message}");
                println!("{HELP}");
                prompt(&session)?;
                continue;
            }
            LineInput::Text { text, shifted } => (text, shifted),
        };

        if let Some(pending) = feed_text(&mut session, text, shifted) {
            render(&mut session);
            if let Some(indicator) = session.loading_indicator() {
                println!("⏳ {indicator}");
            }
            let reply = relay.generate(&pending.topic, pending.kind).await;
            session.complete(pending, reply);
            render(&mut session);
        }

        if shifted {
            print!("… ");
            io::stdout().flush()?;
        } else {
            prompt(&session)?;
        }
    }

    Ok(())
}

async fn run_command(
    command: Command,
    session: &mut ChatSession,
    clipboard: &mut SystemClipboard,
    config: &ClientConfig,
) {
    match command {
        Command::Select(kind) => session.select_content_type(kind),
        Command::Count => println!("✍️ Content created: {}", session.user_request_count()),
        Command::Copy(id) => match session.copy_message(id, clipboard) {
            Ok(ack) => println!("{ack}"),
            Err(err) => eprintln!("⚠️ {err}"),
        },
        Command::Download(id) => match session.download_message(id, &config.download_dir).await {
            Ok(path) => println!("💾 Saved {}", path.display()),
            Err(err) => eprintln!("⚠️ {err}"),
        },
        Command::Quit => {}
    }
}

fn render(session: &mut ChatSession) {
    for message in session.take_unrendered() {
        print_message(message);
    }
}

fn print_message(message: &Message) {
    let who = match message.sender {
        Sender::User => "🧑 You",
        Sender::Bot => "📖 Mr Bukkan",
    };
    match message.request_badge() {
        Some(badge) => println!("[{}] {who} · {badge} · #{}", message.time, message.id),
        None => println!("[{}] {who} · #{}", message.time, message.id),
    }
    println!("{}", message.text);
    if message.has_actions() {
        println!(
            "— {} words · /copy {id} · /download {id}",
            message.word_count(),
            id = message.id
        );
    }
    println!();
}

fn prompt(session: &ChatSession) -> io::Result<()> {
    print!(
        "[{} | {}] {}\n> ",
        session.content_type(),
        session.user_request_count(),
        session.placeholder()
    );
    io::stdout().flush()
}
