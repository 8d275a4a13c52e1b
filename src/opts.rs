use clap::{Parser, Subcommand};

/// Manage TXT records through the Porkbun API, for DNS-based domain verification.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, name = "porkbun-txt")]
pub struct Opts {
    /// The path to the configuration file.
    #[clap(long)]
    pub config: Option<String>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a TXT record, unless one already exists at that name.
    Create {
        /// The domain managed by Porkbun, like example.com
        domain: String,
        /// The TXT value.
        content: String,
        /// Name below the domain. Leave out for the domain itself.
        #[clap(long, short, default_value = "")]
        subdomain: String,
    },
    /// Delete the TXT records at a name. Does nothing if there are none.
    Delete {
        domain: String,
        #[clap(long, short, default_value = "")]
        subdomain: String,
    },
    /// List the TXT records at a name.
    Retrieve {
        domain: String,
        #[clap(long, short, default_value = "")]
        subdomain: String,
        /// Print the records as JSON.
        #[clap(action, long)]
        json: bool,
    },
}
