use anyhow::Context;
use clap::Parser;
use opts::{Command, Opts};
use porkbun_txt::{config, ClientError, Porkbun, Record, TxtRecords};
mod opts;

fn display_subdomain(subdomain: &str) -> &str {
    if subdomain.is_empty() {
        "@"
    } else {
        subdomain
    }
}

fn render_records(records: &[Record], json: bool) -> Result<String, ClientError> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    Ok(records
        .iter()
        .map(|record| format!("{}\t{}\t{}\t{}", record.id, record.name, record.ttl, record.content))
        .collect::<Vec<_>>()
        .join("\n"))
}

async fn run(records: &dyn TxtRecords, command: &Command) -> Result<(), ClientError> {
    match command {
        Command::Create {
            domain,
            content,
            subdomain,
        } => {
            records.create(domain, subdomain, content).await?;
            println!(
                "TXT record for {} on {} is in place",
                display_subdomain(subdomain),
                domain
            );
        }
        Command::Delete { domain, subdomain } => {
            records.delete(domain, subdomain).await?;
            println!(
                "No TXT record left for {} on {}",
                display_subdomain(subdomain),
                domain
            );
        }
        Command::Retrieve {
            domain,
            subdomain,
            json,
        } => {
            let found = records.retrieve(domain, subdomain).await?;
            if found.is_empty() && !json {
                println!(
                    "No TXT records for {} on {}",
                    display_subdomain(subdomain),
                    domain
                );
            } else {
                println!("{}", render_records(&found, *json)?);
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();
    let conf = config::load_config(opts.config.as_deref())?;
    config::validate_config(&conf)?;
    let client = Porkbun::with_base_url(conf.credentials(), &conf.base_url)
        .context("Failed to set up the HTTP client")?;
    run(&client, &opts.command)
        .await
        .context("Porkbun request failed")?;
    Ok(())
}
