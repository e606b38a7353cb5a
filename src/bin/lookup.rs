use anyhow::Result;
use clap::{Parser, Subcommand};
use medi_guide::adapters::http::response::{to_pretty_json, FirstAidResponse, SymptomCheckResponse};
use medi_guide::config::DEFAULT_DATA_DIR;
use medi_guide::utils::logger;
use medi_guide::{JsonReferenceStore, LocalStorage, LookupService};

/// 不啟動伺服器，直接對資料檔執行查詢
#[derive(Debug, Parser)]
#[command(name = "medi-lookup")]
#[command(about = "Run symptom and first aid lookups against the reference data files")]
struct Args {
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Comma separated symptoms, e.g. \"chest pain,headache\"")]
    Symptoms {
        #[arg(value_delimiter = ',')]
        symptoms: Vec<String>,
    },
    #[command(about = "Substring to search for in first aid topics and steps")]
    FirstAid { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let store = JsonReferenceStore::new(LocalStorage::new(&args.data_dir));
    let service = LookupService::new(store);

    let output = match args.command {
        Command::Symptoms { symptoms } => {
            let symptoms: Vec<String> = symptoms
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            let recommendations = service.check_symptoms(&symptoms).await?;
            to_pretty_json(&SymptomCheckResponse {
                success: true,
                recommendations,
            })?
        }
        Command::FirstAid { query } => {
            let results = service.search_first_aid(&query).await?;
            to_pretty_json(&FirstAidResponse {
                success: true,
                results,
            })?
        }
    };

    println!("{}", output);
    Ok(())
}
