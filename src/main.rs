use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

use imagescout::config::Config;
use imagescout::keywords::Language;
use imagescout::logging::configure_logging;
use imagescout::session::{SessionState, Stage};
use imagescout::unsplash::UnsplashClient;

#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let config = Config::from_env()?;
    let client = UnsplashClient::new(&config)?;
    let mut state = SessionState::new();

    info!("imagescout started");
    println!("Get image suggestions for your article. Use them as featured image or content material.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        match state.stage() {
            Stage::Input => {
                if state.has_error() {
                    if state.message().is_empty() {
                        println!("Please enter some article text.");
                    } else {
                        println!("{}", state.message());
                    }
                }

                let Some(article) = read_article(&mut input)? else {
                    break;
                };
                state.set_article(article);

                let Some(language) = prompt_language(&mut input)? else {
                    break;
                };
                state.set_language(language);

                println!("Generating suggestions...");
                state.generate(&client).await;
            }
            Stage::Results => {
                show_active_photo(&state);

                print!("[n]ext, [p]revious, [1-{}] jump, [d]ownload, [b]ack, [q]uit > ", state.photos().len());
                io::stdout().flush()?;
                let Some(command) = read_trimmed_line(&mut input)? else {
                    break;
                };

                match command.as_str() {
                    "n" | "" => state.next_photo(),
                    "p" => state.previous_photo(),
                    "d" => {
                        if let Some(path) = state.download(&client, state.active_index()).await {
                            println!("Saved to {}", path.display());
                        }
                    }
                    "b" => state.reset(),
                    "q" => break,
                    other => {
                        if let Ok(number) = other.parse::<usize>() {
                            state.select_index(number.saturating_sub(1));
                        } else {
                            println!("Unknown command '{}'", other);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read the article text, terminated by an empty line. Returns `None` on
/// end of input.
fn read_article(input: &mut impl BufRead) -> Result<Option<String>> {
    println!("Paste the article text, then finish with an empty line:");

    let mut lines: Vec<String> = Vec::new();
    loop {
        match read_raw_line(input)? {
            None => {
                if lines.is_empty() {
                    return Ok(None);
                }
                break;
            }
            Some(line) if line.is_empty() => break,
            Some(line) => lines.push(line),
        }
    }

    Ok(Some(lines.join("\n")))
}

/// Prompt for the article language; empty input keeps the default. Returns
/// `None` on end of input.
fn prompt_language(input: &mut impl BufRead) -> Result<Option<Language>> {
    let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
    println!("Language ({}) [{}]:", names.join(", "), Language::default());

    let Some(answer) = read_trimmed_line(input)? else {
        return Ok(None);
    };
    if answer.is_empty() {
        return Ok(Some(Language::default()));
    }

    match Language::parse(&answer) {
        Some(language) => Ok(Some(language)),
        None => {
            println!("Unknown language '{}', using {}.", answer, Language::default());
            Ok(Some(Language::default()))
        }
    }
}

fn show_active_photo(state: &SessionState) {
    if let Some(photo) = state.active_photo() {
        println!();
        println!(
            "Photo {}/{} by {} (@{}) on Unsplash",
            state.active_index() + 1,
            state.photos().len(),
            photo.user.name,
            photo.user.username
        );
        if let Some(url) = photo.display_url() {
            println!("  {}", url);
        }
    }
}

fn read_trimmed_line(input: &mut impl BufRead) -> Result<Option<String>> {
    Ok(read_raw_line(input)?.map(|line| line.trim().to_string()))
}

// Returns None once stdin is exhausted.
fn read_raw_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
