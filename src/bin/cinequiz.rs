//! Terminal front end for the CineQuiz API.
//!
//! Runs the five-question preference quiz, sends the answers to the
//! server and renders the recommendation cards. Marking a movie as
//! watched asks the server for a single replacement.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use cinequiz_api::client::ApiClient;
use cinequiz_api::models::{
    ModelKind, Movie, RecommendationsRequest, ReplacementRequest,
};
use cinequiz_api::quiz::{QuizSession, DEFAULT_LANGUAGE, LANGUAGES};

#[derive(Parser)]
#[command(name = "cinequiz")]
#[command(about = "Discover your perfect movie through a short preference quiz", long_about = None)]
struct Cli {
    /// Base URL of the CineQuiz API server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server: String,

    /// LLM backend: openai, groq or gemini (server default when omitted)
    #[arg(long)]
    model: Option<String>,

    /// Language for descriptions and the viewer profile
    #[arg(long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let model = cli
        .model
        .as_deref()
        .map(str::parse::<ModelKind>)
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let client = ApiClient::new(&cli.server);

    println!();
    println!("{}", style("Discover Your Perfect Movie").cyan().bold());
    println!(
        "{}",
        style("Let AI guide you to your next favorite film through a unique and personalized journey")
            .dim()
    );
    println!();

    let language = match cli.language {
        Some(language) => language,
        None => pick_language()?,
    };

    // Titles the viewer has marked as watched, excluded from later batches.
    let mut watched: Vec<String> = Vec::new();

    loop {
        let answers = run_quiz()?;

        let request = RecommendationsRequest {
            answers: answers.clone(),
            model,
            language: Some(language.clone()),
            watched_movies: watched.clone(),
        };

        let spinner = thinking_spinner("Curating your movies...");
        let response = client.recommendations(&request).await;
        spinner.finish_and_clear();

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                render_error(&e.to_string());
                std::process::exit(1);
            }
        };

        let mut movies = response.recommendations;
        render_recommendations(&movies, response.viewer_profile.as_deref());

        if !review_loop(&client, &answers, model, &language, &mut movies, &mut watched).await? {
            break;
        }
        // The viewer asked to retake the quiz.
        println!();
    }

    Ok(())
}

/// Walks the question catalog interactively and returns the five answers
fn run_quiz() -> Result<Vec<String>> {
    let mut session = QuizSession::new();

    while let Some(question) = session.current_question() {
        println!(
            "{}   {}",
            style(format!(
                "Question {}/{}",
                session.question_number(),
                session.total_questions()
            ))
            .cyan(),
            style(format!("{}% Complete", session.progress_percent())).cyan(),
        );
        println!("{}", style(question.text).bold());

        for (i, option) in question.options.iter().enumerate() {
            println!("  {} {}", style(format!("{}.", i + 1)).cyan(), option);
        }

        let choice = read_choice(question.options.len())?;
        session
            .select(choice)
            .map_err(|e| anyhow::anyhow!("quiz state error: {}", e))?;
        println!();
    }

    Ok(session.into_answers())
}

/// Numbered language picker; Enter keeps the default
fn pick_language() -> Result<String> {
    println!("{}", style("Preferred language:").bold());
    for (i, language) in LANGUAGES.iter().enumerate() {
        println!("  {} {}", style(format!("{:2}.", i + 1)).cyan(), language);
    }

    loop {
        let input = read_line(&format!(
            "Pick a language [1-{}], or press Enter for {}: ",
            LANGUAGES.len(),
            DEFAULT_LANGUAGE
        ))?;

        if input.is_empty() {
            println!();
            return Ok(DEFAULT_LANGUAGE.to_string());
        }

        match input.parse::<usize>() {
            Ok(n) if (1..=LANGUAGES.len()).contains(&n) => {
                println!();
                return Ok(LANGUAGES[n - 1].to_string());
            }
            _ => println!(
                "{}",
                style(format!(
                    "Please enter a number between 1 and {}",
                    LANGUAGES.len()
                ))
                .yellow()
            ),
        }
    }
}

/// Card view plus the watched/retake/quit loop.
/// Returns true when the viewer wants to retake the quiz.
async fn review_loop(
    client: &ApiClient,
    answers: &[String],
    model: Option<ModelKind>,
    language: &str,
    movies: &mut Vec<Movie>,
    watched: &mut Vec<String>,
) -> Result<bool> {
    if movies.is_empty() {
        return Ok(false);
    }

    loop {
        let input = read_line(&format!(
            "Mark a movie as watched [1-{}] to get a replacement, retake the quiz [r], or quit [q]: ",
            movies.len()
        ))?;

        match input.as_str() {
            "q" | "Q" => return Ok(false),
            "r" | "R" => return Ok(true),
            _ => {}
        }

        let Ok(n) = input.parse::<usize>() else {
            println!("{}", style("Unrecognized choice").yellow());
            continue;
        };
        if n == 0 || n > movies.len() {
            println!("{}", style("Unrecognized choice").yellow());
            continue;
        }

        let watched_movie = movies[n - 1].title.clone();
        watched.push(watched_movie.clone());
        // Exclude everything currently on screen as well, so the
        // replacement is genuinely new.
        let mut exclude = watched.clone();
        exclude.extend(movies.iter().map(|m| m.title.clone()));
        exclude.sort();
        exclude.dedup();

        let request = ReplacementRequest {
            answers: answers.to_vec(),
            watched_movie: watched_movie.clone(),
            model,
            language: Some(language.to_string()),
            watched_movies: exclude,
        };

        let spinner = thinking_spinner("Finding a replacement...");
        let replacement = client.replace(&request).await;
        spinner.finish_and_clear();

        match replacement {
            Ok(movie) => {
                println!(
                    "{}",
                    style(format!("Replaced \"{}\" with \"{}\"", watched_movie, movie.title))
                        .green()
                );
                movies[n - 1] = movie;
                render_recommendations(movies, None);
            }
            Err(e) => render_error(&format!("Failed to get a replacement movie: {}", e)),
        }
    }
}

fn render_recommendations(movies: &[Movie], viewer_profile: Option<&str>) {
    println!();

    if let Some(profile) = viewer_profile {
        println!("{}", style("Your Movie Personality").cyan().bold());
        println!("{}", profile);
        println!();
    }

    if movies.is_empty() {
        println!(
            "{}",
            style("No recommendations available. Try answering a few more questions!").dim()
        );
        return;
    }

    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{} {}  {}",
            style(format!("{}.", i + 1)).cyan().bold(),
            style(&movie.title).bold(),
            style(format!("{}% Match", movie.match_score)).green(),
        );
        println!("   {}", movie.description);
        println!();
    }
}

fn render_error(message: &str) {
    println!("{} {}", style("✗").red().bold(), style(message).red());
}

fn thinking_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Reads a 1-based option choice, reprompting until valid
fn read_choice(max: usize) -> Result<usize> {
    loop {
        let input = read_line(&format!("Your answer [1-{}]: ", max))?;
        match input.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n - 1),
            _ => println!(
                "{}",
                style(format!("Please enter a number between 1 and {}", max)).yellow()
            ),
        }
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        anyhow::bail!("input closed");
    }

    Ok(line.trim().to_string())
}
