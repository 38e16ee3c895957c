use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List projects, optionally narrowed to one category
    List {
        /// Category name, e.g. "SaaS" (defaults to All)
        #[arg(long, default_value = "All")]
        category: String,

        /// Only show featured projects
        #[arg(long)]
        featured: bool,
    },

    /// Show one case study and walk its gallery
    Show {
        slug: String,

        /// Gallery image to open first
        #[arg(long, default_value = "0")]
        image: usize,
    },

    /// List every case study slug
    Slugs,

    /// Show skills and the experience timeline
    About,

    /// Run the role rotator and headline typewriter for a while
    Hero {
        #[arg(long, default_value = "10")]
        seconds: u64,
    },
}
