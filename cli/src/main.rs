use anyhow::{Context, Result};
use clap::Parser;
use engine::{InteractionKind, RecommendationEngine, SearchBy, DEFAULT_DECAY_FACTOR};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "zaprec")]
#[command(about = "Interactive product recommendation console", long_about = None)]
struct Args {
    /// JSONL file of products to load ({"id","name","category"} per line)
    #[arg(long)]
    products: Option<String>,
    /// JSONL file of interactions to load ({"user","product","score","kind"} per line)
    #[arg(long)]
    interactions: Option<String>,
    /// Skip the built-in demo dataset
    #[arg(long, default_value_t = false)]
    no_demo: bool,
    /// Per-day score decay factor used for recommendations
    #[arg(long, default_value_t = DEFAULT_DECAY_FACTOR)]
    decay: f64,
}

#[derive(Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    category: String,
}

#[derive(Deserialize)]
struct InteractionRecord {
    user: String,
    product: String,
    score: f64,
    kind: InteractionKind,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut engine = RecommendationEngine::new();
    if !args.no_demo {
        load_demo(&mut engine);
    }
    if let Some(path) = &args.products {
        let n = load_products(&mut engine, path)?;
        tracing::info!(n, path, "loaded products");
    }
    if let Some(path) = &args.interactions {
        let n = load_interactions(&mut engine, path)?;
        tracing::info!(n, path, "loaded interactions");
    }

    run_menu(&engine, args.decay)
}

fn run_menu(engine: &RecommendationEngine, decay: f64) -> Result<()> {
    loop {
        println!("\nMenu:");
        println!("1. Get Recommendations");
        println!("2. Search Products");
        println!("3. Display All Interactions");
        println!("4. Exit");

        let Some(choice) = prompt("Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => recommend_action(engine, decay)?,
            "2" => search_action(engine)?,
            "3" => display_interactions(engine),
            "4" => {
                println!("Bye.");
                break;
            }
            _ => println!("Invalid choice"),
        }
    }
    Ok(())
}

fn recommend_action(engine: &RecommendationEngine, decay: f64) -> Result<()> {
    let Some(user) = prompt("Enter user ID: ")? else {
        return Ok(());
    };
    let Some(raw_k) = prompt("Enter the number of recommendations: ")? else {
        return Ok(());
    };
    // The engine clamps internally; a positive integer is this layer's rule.
    let k = match raw_k.parse::<usize>() {
        Ok(k) if k > 0 => k,
        _ => {
            println!("Invalid input: k must be a positive integer.");
            return Ok(());
        }
    };

    let recommendations = engine.get_recommendations(&user, k, decay);
    println!("\nRecommendations for user {user}:");
    if recommendations.is_empty() {
        println!("(none)");
    }
    for (product_id, score) in recommendations {
        let name = engine
            .product(&product_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        println!("Product ID: {product_id}, Product Name: {name}, Weighted Score: {score:.2}");
    }
    Ok(())
}

fn search_action(engine: &RecommendationEngine) -> Result<()> {
    let Some(raw) = prompt("Search by name (n) or category (c)? ")? else {
        return Ok(());
    };
    let search_by = match raw.to_lowercase().as_str() {
        "n" => SearchBy::Name,
        "c" => SearchBy::Category,
        other => match SearchBy::from_str(other) {
            Ok(s) => s,
            Err(_) => {
                println!("Invalid choice");
                return Ok(());
            }
        },
    };
    let Some(query) = prompt("Enter search query: ")? else {
        return Ok(());
    };

    let results = engine.search_products(&query, search_by);
    println!("\nProducts matching '{query}':");
    if results.is_empty() {
        println!("(none)");
    }
    for (product_id, product_name) in results {
        println!("Product ID: {product_id}, Product Name: {product_name}");
    }
    Ok(())
}

fn display_interactions(engine: &RecommendationEngine) {
    println!("User to Product Interactions:");
    for user in engine.users() {
        let entries: Vec<String> = engine
            .interactions_of_user(user)
            .map(|(p, i)| format!("{p}: {:.1} ({}, t={:.0})", i.score, i.kind, i.timestamp))
            .collect();
        println!("{user}: [{}]", entries.join(", "));
    }

    println!("\nProduct to User Interactions:");
    for product in engine.products_with_interactions() {
        let entries: Vec<String> = engine
            .interactions_on_product(product)
            .map(|(u, i)| format!("{u}: {:.1} ({}, t={:.0})", i.score, i.kind, i.timestamp))
            .collect();
        println!("{product}: [{}]", entries.join(", "));
    }
}

/// Print `msg` and read one trimmed line; `None` on EOF.
fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn load_products(engine: &mut RecommendationEngine, path: &str) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("open products file {path}"))?;
    let mut n = 0;
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let rec: ProductRecord = serde_json::from_str(&line)
            .with_context(|| format!("{path}:{}: bad product record", lineno + 1))?;
        engine.add_product(&rec.id, &rec.name, &rec.category);
        n += 1;
    }
    Ok(n)
}

fn load_interactions(engine: &mut RecommendationEngine, path: &str) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("open interactions file {path}"))?;
    let mut n = 0;
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let rec: InteractionRecord = serde_json::from_str(&line)
            .with_context(|| format!("{path}:{}: bad interaction record", lineno + 1))?;
        engine.add_interaction(&rec.user, &rec.product, rec.score, rec.kind);
        n += 1;
    }
    Ok(n)
}

fn load_demo(engine: &mut RecommendationEngine) {
    engine.add_product("p1", "laptop", "electronics");
    engine.add_product("p2", "smartphone", "electronics");
    engine.add_product("p3", "smartwatch", "wearables");
    engine.add_product("p4", "laptop cover", "accessories");
    engine.add_product("p5", "tablet", "electronics");
    engine.add_product("p6", "headphones", "accessories");
    engine.add_product("p7", "fitness tracker", "wearables");
    engine.add_product("p8", "camera", "electronics");

    engine.add_interaction("user1", "p1", 5.0, InteractionKind::Purchase);
    engine.add_interaction("user1", "p2", 3.0, InteractionKind::View);
    engine.add_interaction("user2", "p1", 4.0, InteractionKind::Purchase);
    engine.add_interaction("user2", "p3", 2.0, InteractionKind::View);
    engine.add_interaction("user3", "p2", 5.0, InteractionKind::Like);
    engine.add_interaction("user4", "p1", 5.0, InteractionKind::Purchase);
    engine.add_interaction("user5", "p1", 1.0, InteractionKind::View);
    engine.add_interaction("user6", "p5", 4.0, InteractionKind::Purchase);
    engine.add_interaction("user7", "p6", 5.0, InteractionKind::View);
    engine.add_interaction("user8", "p7", 5.0, InteractionKind::Like);
    engine.add_interaction("user9", "p8", 4.0, InteractionKind::Purchase);
    engine.add_interaction("user3", "p5", 5.0, InteractionKind::View);
    engine.add_interaction("user9", "p2", 4.0, InteractionKind::Purchase);
    engine.add_interaction("user9", "p1", 4.0, InteractionKind::Purchase);
    tracing::info!(products = 8, interactions = 14, "demo dataset loaded");
}
