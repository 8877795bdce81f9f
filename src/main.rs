use clap::Parser;
use std::io::Read;
use std::path::Path;

use excerpt::{
    expand_query, extract, score, tokenize, Dictionary, EmptyDictionary, SnippetConfig, WordList,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Snip {
            file,
            query,
            max_words,
            min_preceding,
            dictionary,
            plain,
            json,
        } => run_snip(
            &file,
            &query,
            max_words,
            min_preceding,
            dictionary.as_deref(),
            plain,
            json,
        ),
        Commands::Expand { query, dictionary } => run_expand(&query, dictionary.as_deref()),
        Commands::Tokens {
            file,
            query,
            dictionary,
        } => run_tokens(&file, query.as_deref(), dictionary.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Read a document from a file path, or from stdin when the path is "-".
fn read_document(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
    }
}

/// Load the word list, or fall back to the empty dictionary.
///
/// The word list is loaded once here and shared read-only for the rest of
/// the process.
fn load_dictionary(path: Option<&str>) -> Result<Box<dyn Dictionary>, String> {
    match path {
        Some(path) => Ok(Box::new(WordList::load(Path::new(path))?)),
        None => Ok(Box::new(EmptyDictionary)),
    }
}

fn run_snip(
    file: &str,
    query: &str,
    max_words: usize,
    min_preceding: usize,
    dictionary: Option<&str>,
    plain: bool,
    json: bool,
) -> Result<(), String> {
    let config = SnippetConfig::new(max_words, min_preceding).map_err(|e| e.to_string())?;
    let document = read_document(file)?;
    let dict = load_dictionary(dictionary)?;

    let result = extract(&document, query, dict.as_ref(), &config);

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", rendered);
    } else if plain {
        println!("{}", result.text);
    } else if display::use_color() {
        println!("{}", display::colorize_markers(&result.highlighted));
    } else {
        println!("{}", result.highlighted);
    }

    Ok(())
}

fn run_expand(query: &str, dictionary: Option<&str>) -> Result<(), String> {
    let dict = load_dictionary(dictionary)?;
    let mut terms: Vec<String> = expand_query(query, dict.as_ref()).into_iter().collect();
    terms.sort();

    for term in terms {
        println!("{}", term);
    }

    Ok(())
}

fn run_tokens(file: &str, query: Option<&str>, dictionary: Option<&str>) -> Result<(), String> {
    let config = SnippetConfig::default();
    let document = read_document(file)?;
    let tokens = tokenize(&document, &config);

    let terms = match query {
        Some(query) => {
            let dict = load_dictionary(dictionary)?;
            expand_query(query, dict.as_ref())
        }
        None => Default::default(),
    };

    let (scored, best) = score(&tokens, &terms, config.max_window());
    print!("{}", display::format_token_table(&scored, display::use_color()));
    if !scored.is_empty() {
        println!("best index: {}", best);
    }

    Ok(())
}
