//! Glossa CLI - Rule-Based Text Analysis
//!
//! Command-line interface for analyzing text, batches of documents, mock
//! transcripts, and chatting with the scripted bot.

use clap::{Parser, Subcommand};
use glossa::{
    detect_language, pos_tag, stem, tokenize, transcribe_path, Analysis, ChatBot, Config, GlossaError, Result, SentimentLabel, SentimentScorer, TextAnalyzer,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "glossa")]
#[command(author = "Glossa Contributors")]
#[command(version)]
#[command(about = "Rule-based text analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analysis on a text
    Analyze {
        /// Text to analyze (alternative to --input)
        text: Option<String>,

        /// Input file (use "-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,

        /// Number of keywords to show
        #[arg(short = 'k', long, default_value = "5")]
        keywords: usize,
    },

    /// Split text into tokens
    Tokenize {
        /// Text to tokenize
        text: String,
    },

    /// Stem one or more words
    Stem {
        /// Words to stem
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Score the sentiment of a text
    Sentiment {
        /// Text to score
        text: String,
    },

    /// Tag parts of speech
    Pos {
        /// Text to tag
        text: String,
    },

    /// Detect the language of a text
    Language {
        /// Text to inspect
        text: String,
    },

    /// Analyze a file with one document per line
    Batch {
        /// Input file (one document per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for JSON lines (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Produce the mock transcript of an audio file and analyze it
    Transcribe {
        /// Audio file (only its name is used)
        file: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Chat with the scripted bot on stdin
    Chat {
        /// Random seed for reproducible replies
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Analyze {
            text,
            input,
            json,
            keywords,
        } => run_analyze(&config, text, input, json, keywords),

        Commands::Tokenize { text } => {
            println!("{}", tokenize(&text).join(" | "));
            Ok(())
        }

        Commands::Stem { words } => {
            for word in words {
                println!("{} -> {}", word, stem(&word));
            }
            Ok(())
        }

        Commands::Sentiment { text } => {
            let result = SentimentScorer::new(config.sentiment.clone()).analyze(&text);
            println!("{} ({:+.4})", result.label, result.score);
            Ok(())
        }

        Commands::Pos { text } => {
            for token in pos_tag(&text) {
                println!("{:<20} {}", token.word, token.pos);
            }
            Ok(())
        }

        Commands::Language { text } => {
            println!("{}", detect_language(&text));
            Ok(())
        }

        Commands::Batch { input, output } => run_batch(&config, input, output),

        Commands::Transcribe { file, json } => run_transcribe(&config, file, json),

        Commands::Chat { seed } => run_chat(&config, seed),
    });

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(path)
        }
        None => Ok(Config::default()),
    }
}

fn read_input(text: Option<String>, input: Option<String>) -> Result<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) if path == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(GlossaError::EmptyInput(
            "provide TEXT or --input".to_string(),
        )),
    }
}

fn run_analyze(
    config: &Config,
    text: Option<String>,
    input: Option<String>,
    json: bool,
    keywords: usize,
) -> Result<()> {
    let text = read_input(text, input)?;
    let analysis = TextAnalyzer::new(config.sentiment.clone()).analyze(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis, keywords);
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis, keywords: usize) {
    println!("Language:   {}", analysis.language);
    println!(
        "Sentiment:  {} ({:+.4})",
        analysis.sentiment.label, analysis.sentiment.score
    );
    println!("Tokens:     {}", analysis.tokens.join(" | "));
    println!(
        "Stems:      {}",
        analysis
            .stems
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" | ")
    );
    println!("Filtered:   {}", analysis.filtered.join(" | "));

    let top = analysis.keywords(keywords);
    if !top.is_empty() {
        let formatted: Vec<String> = top
            .iter()
            .map(|(stem, count)| format!("{} ({})", stem, count))
            .collect();
        println!("Keywords:   {}", formatted.join(", "));
    }

    println!();
    println!("Parts of speech:");
    for token in &analysis.pos_tags {
        println!("  {:<20} {}", token.word, token.pos);
    }
}

fn run_batch(config: &Config, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let start_time = Instant::now();

    let file = File::open(&input)?;
    let documents: Vec<String> = io::BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if documents.is_empty() {
        return Err(GlossaError::EmptyInput(format!(
            "no documents in {}",
            input.display()
        )));
    }

    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style);
    pb.set_message(format!("Analyzing {} documents (parallel)...", documents.len()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let analyzer = TextAnalyzer::new(config.sentiment.clone());
    let results = analyzer.analyze_batch_with(&documents, &config.batch)?;

    pb.finish_and_clear();

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for analysis in &results {
        serde_json::to_writer(&mut writer, analysis)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    let mut labels: BTreeMap<&str, usize> = BTreeMap::new();
    let mut languages: BTreeMap<&str, usize> = BTreeMap::new();
    for analysis in &results {
        *labels.entry(analysis.sentiment.label.as_str()).or_default() += 1;
        *languages.entry(analysis.language.name()).or_default() += 1;
    }

    eprintln!(
        "✓ Analyzed {} documents in {:.2?}",
        results.len(),
        start_time.elapsed()
    );
    for label in [SentimentLabel::Positive, SentimentLabel::Neutral, SentimentLabel::Negative] {
        eprintln!(
            "   {:<10} {}",
            label,
            labels.get(label.as_str()).copied().unwrap_or(0)
        );
    }
    for (language, count) in &languages {
        eprintln!("   {:<10} {}", language, count);
    }
    if let Some(path) = output {
        eprintln!("   Output: {}", path.display());
    }

    Ok(())
}

fn run_transcribe(config: &Config, file: PathBuf, json: bool) -> Result<()> {
    let transcript = transcribe_path(&file)?;
    let analysis = TextAnalyzer::new(config.sentiment.clone()).analyze(transcript);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("Transcript: {}", transcript);
        println!();
        print_analysis(&analysis, 5);
    }
    Ok(())
}

fn run_chat(config: &Config, seed: Option<u64>) -> Result<()> {
    let mut chat_config = config.chat.clone();
    if seed.is_some() {
        chat_config.seed = seed;
    }

    let mut bot = ChatBot::from_config(&chat_config)
        .with_scorer(SentimentScorer::new(config.sentiment.clone()));
    println!("Eliza: {}", glossa::chat::GREETING);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        match message {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                bot.reset();
                println!("Eliza: {}", glossa::chat::GREETING);
                continue;
            }
            _ => {}
        }

        let reply = bot.respond(message)?;
        println!("Eliza: {}  [{}]", reply.text, reply.sentiment.label);
    }

    Ok(())
}
