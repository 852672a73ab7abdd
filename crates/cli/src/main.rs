//! Jobtrack CLI - Command-line client for the jobtrack daemon

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9630";

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Jobtrack CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "JOBTRACK_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Owner whose records are read and written
    #[arg(long, env = "JOBTRACK_OWNER", global = true)]
    owner: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs (filtered, sorted, paginated)
    List(ListArgs),

    /// Show one job
    Show {
        /// Job ID
        job_id: String,
    },

    /// Create a job
    Create {
        #[arg(short, long)]
        company: String,

        #[arg(short, long)]
        position: String,

        /// pending | interview | declined
        #[arg(short, long)]
        status: Option<String>,

        /// full-time | part-time | internship | contract
        #[arg(short, long)]
        job_type: Option<String>,
    },

    /// Update fields of a job
    Update {
        /// Job ID
        job_id: String,

        #[arg(short, long)]
        company: Option<String>,

        #[arg(short, long)]
        position: Option<String>,

        #[arg(short, long)]
        status: Option<String>,

        #[arg(short, long)]
        job_type: Option<String>,
    },

    /// Delete a job
    Delete {
        /// Job ID
        job_id: String,
    },

    /// Show status summary and monthly applications
    Stats,

    /// Bulk-create jobs from a JSON array file
    Populate {
        /// JSON file: [{ "company", "position", "status"?, "jobType"? }, ...]
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive substring of the position
    #[arg(long)]
    search: Option<String>,

    /// Job type or "all"
    #[arg(short, long)]
    job_type: Option<String>,

    /// Status or "all"
    #[arg(short, long)]
    status: Option<String>,

    /// latest | newest | a-z | z-a
    #[arg(long)]
    sort: Option<String>,

    #[arg(short, long)]
    page: Option<String>,

    #[arg(short, long)]
    limit: Option<String>,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobRecord {
    id: String,
    company: String,
    position: String,
    status: String,
    job_type: String,
    created_at: i64,
}

#[derive(Tabled)]
struct JobRow {
    id: String,
    company: String,
    position: String,
    status: String,
    #[tabled(rename = "type")]
    job_type: String,
    created: String,
}

impl From<JobRecord> for JobRow {
    fn from(job: JobRecord) -> Self {
        Self {
            id: job.id,
            company: job.company,
            position: job.position,
            status: job.status,
            job_type: job.job_type,
            created: format_millis(job.created_at),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobPage {
    jobs: Vec<JobRecord>,
    total_jobs: i64,
    num_of_pages: i64,
}

#[derive(Deserialize)]
struct JobEnvelope {
    job: JobRecord,
}

fn format_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// Attach the owner to a params object
fn owned_params(owner: &str, mut params: Value) -> Value {
    if let Value::Object(map) = &mut params {
        map.insert("owner_id".to_string(), json!(owner));
    }
    params
}

fn print_job(job: JobRecord) {
    println!("{}", Table::new(vec![JobRow::from(job)]));
}

async fn populate(rpc_url: &str, owner: &str, file: &PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records: Vec<Value> =
        serde_json::from_str(&content).context("Expected a JSON array of job objects")?;

    println!("{}", format!("Populating {} jobs...", records.len()).cyan().bold());

    let mut created = 0usize;
    for (index, record) in records.into_iter().enumerate() {
        if !record.is_object() {
            println!("  {} #{}: not a JSON object", "✗".red(), index);
            continue;
        }
        match call_rpc(rpc_url, "jobs.create.v1", owned_params(owner, record)).await {
            Ok(_) => created += 1,
            Err(e) => println!("  {} #{}: {}", "✗".red(), index, e),
        }
    }

    println!("{}", format!("✓ {} jobs created", created).green().bold());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let owner = cli
        .owner
        .clone()
        .context("Owner required: pass --owner or set JOBTRACK_OWNER")?;
    let url = cli.rpc_url.as_str();

    match cli.command {
        Commands::List(args) => {
            let params = json!({
                "owner_id": owner,
                "search": args.search,
                "job_type": args.job_type,
                "status": args.status,
                "sort": args.sort,
                "page": args.page,
                "limit": args.limit,
            });

            let result = call_rpc(url, "jobs.list.v1", params).await?;
            let page: JobPage = serde_json::from_value(result)?;

            println!(
                "{}",
                format!("{} jobs, {} pages", page.total_jobs, page.num_of_pages)
                    .cyan()
                    .bold()
            );
            if page.jobs.is_empty() {
                println!("{}", "No jobs on this page".yellow());
            } else {
                let rows: Vec<JobRow> = page.jobs.into_iter().map(JobRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Show { job_id } => {
            let params = json!({ "owner_id": owner, "job_id": job_id });
            let result = call_rpc(url, "jobs.get.v1", params).await?;
            let envelope: JobEnvelope = serde_json::from_value(result)?;
            print_job(envelope.job);
        }

        Commands::Create {
            company,
            position,
            status,
            job_type,
        } => {
            let params = json!({
                "owner_id": owner,
                "company": company,
                "position": position,
                "status": status,
                "jobType": job_type,
            });

            let result = call_rpc(url, "jobs.create.v1", params).await?;
            let envelope: JobEnvelope = serde_json::from_value(result)?;

            println!("{}", "✓ Job created".green().bold());
            println!();
            print_job(envelope.job);
        }

        Commands::Update {
            job_id,
            company,
            position,
            status,
            job_type,
        } => {
            let params = json!({
                "owner_id": owner,
                "job_id": job_id,
                "company": company,
                "position": position,
                "status": status,
                "jobType": job_type,
            });

            let result = call_rpc(url, "jobs.update.v1", params).await?;
            let envelope: JobEnvelope = serde_json::from_value(result)?;

            println!("{}", "✓ Job updated".green().bold());
            println!();
            print_job(envelope.job);
        }

        Commands::Delete { job_id } => {
            let params = json!({ "owner_id": owner, "job_id": job_id });
            call_rpc(url, "jobs.delete.v1", params).await?;

            println!("{}", format!("✓ Job {} deleted", job_id).green().bold());
        }

        Commands::Stats => {
            let params = json!({ "owner_id": owner });
            let stats = call_rpc(url, "jobs.stats.v1", params).await?;
            let summary = &stats["defaultStats"];

            println!("{}", "Status Summary".cyan().bold());
            println!("  {} {}", "Pending:".bold(), summary["pending"]);
            println!("  {} {}", "Interview:".bold(), summary["interview"]);
            println!("  {} {}", "Declined:".bold(), summary["declined"]);
            println!();

            println!("{}", "Monthly Applications".cyan().bold());
            match stats["monthlyApplications"].as_array() {
                Some(months) if !months.is_empty() => {
                    for month in months {
                        let date = month["date"].as_str().unwrap_or("?");
                        println!("  {} {}", format!("{}:", date).bold(), month["count"]);
                    }
                }
                _ => println!("  {}", "No applications yet".yellow()),
            }
        }

        Commands::Populate { file } => populate(url, &owner, &file).await?,
    }

    Ok(())
}
