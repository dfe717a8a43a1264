use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install everything, asking before replacing foreign links:\n    \
                   manage-skills install\n\n\
                   Install without prompts (foreign links are left alone):\n    \
                   manage-skills install -y")]
pub struct InstallArgs {
    /// Skip confirmation prompts; links pointing elsewhere are kept
    #[arg(long, short = 'y')]
    pub yes: bool,
}
