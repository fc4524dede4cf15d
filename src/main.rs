use std::{env, fs::{read_to_string, File}, time::Instant};

use pl0_lexer::{display_error, lexer::lexer::tokenize, write_token_listing, Statistics};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        panic!("Incorrect arguments provided! Usage: pl0-lexer <source-file> [output-file]");
    }

    let file_path: &str = &args[1];
    let output_path: &str = if args.len() == 3 { &args[2] } else { "tokens.txt" };

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let source = read_to_string(file_path).expect("Failed to read file!");

    let items = tokenize(source.clone(), Some(String::from(file_name)));

    println!("Tokenized in {:?}", start.elapsed());

    for item in &items {
        if let Err(error) = item {
            display_error(error, &source);
        }
    }

    let mut output = File::create(output_path).expect("Failed to create output file!");
    write_token_listing(&items, &mut output).expect("Failed to write token listing!");

    println!("Token listing written to {}", output_path);

    let stats = Statistics::collect(&items);
    print_statistics(&stats);
}

fn print_statistics(stats: &Statistics) {
    println!("\nIdentified {} tokens, {} errors", stats.total_tokens, stats.errors);
    println!("  keywords:    {}", stats.keywords);
    println!("  identifiers: {}", stats.identifiers);
    println!("  integers:    {}", stats.integers);
    println!("  operators:   {}", stats.operators);
    println!("  delimiters:  {}", stats.delimiters);
}
