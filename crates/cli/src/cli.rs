//! Command-line arguments

use clap::{ArgAction, Args, Parser, Subcommand};
use postapi_codegen::DEFAULT_COUNT;
use std::path::PathBuf;

/// PostAPI Studio: build, document and inspect mock REST APIs
#[derive(Debug, Parser)]
#[command(name = "postapi", version, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Settings file (TOML); falls back to $POSTAPI_CONFIG
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// User id sent in the User-Id header
    #[arg(long, global = true, value_name = "ID")]
    pub user: Option<String>,

    /// Backend base URL
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage projects
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },

    /// Manage resources
    Resources {
        #[command(subcommand)]
        command: ResourcesCommand,
    },

    /// Show today's request usage of a project
    Usage {
        /// Project id
        project: String,
    },

    /// Show request and cache analytics of a project
    Analytics {
        /// Project id
        project: String,
    },

    /// Render the public documentation of a project
    Docs {
        /// Project slug
        slug: String,

        /// Snippet style (shell, fetch, python); repeat for several
        #[arg(long = "style", value_name = "STYLE")]
        styles: Vec<String>,

        /// Include every snippet style
        #[arg(long, conflicts_with = "styles")]
        all_styles: bool,
    },

    /// Check a resource definition file without sending it
    Validate {
        /// Resource definition file (JSON)
        file: PathBuf,
    },

    /// Derive the URL slug for a name
    Slug {
        /// Name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List the routes a resource slug exposes
    Routes {
        /// Resource slug
        slug: String,

        /// Comma-separated method tags
        #[arg(long, default_value = "GET,POST,GET_BY_ID,PUT,DELETE")]
        methods: String,
    },

    /// Print a code sample for one call
    Snippet {
        /// HTTP method (GET, POST, PUT, DELETE)
        #[arg(long)]
        method: String,

        /// Full URL; `{id}` is filled in for PUT and DELETE
        #[arg(long)]
        url: String,

        /// Example JSON body for POST and PUT
        #[arg(long)]
        body: Option<String>,

        /// Snippet style (shell, fetch, python)
        #[arg(long, default_value = "shell")]
        style: String,
    },

    /// Generate sample mock data
    Sample {
        /// Template (user, product, order, blog, comment, custom)
        template: String,

        /// Number of items (1-100)
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,
    },
}

impl Command {
    /// Whether the command talks to the backend
    pub fn needs_backend(&self) -> bool {
        matches!(
            self,
            Command::Projects { .. }
                | Command::Resources { .. }
                | Command::Usage { .. }
                | Command::Analytics { .. }
                | Command::Docs { .. }
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List your projects
    List,

    /// Show a project with its resources, usage and deploy status
    Show {
        /// Project id
        id: String,
    },

    /// Create a project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// URL slug; derived from the name when omitted
        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },

    /// Deploy a project
    Deploy {
        /// Project id
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ResourcesCommand {
    /// List the resources of a project
    List {
        /// Project id
        project: String,
    },

    /// Create a resource from flags or a definition file
    Create {
        /// Project id
        project: String,

        /// Resource definition file (JSON)
        #[arg(long, conflicts_with_all = ["name", "methods", "data"])]
        file: Option<PathBuf>,

        /// Resource name
        #[arg(long, required_unless_present = "file")]
        name: Option<String>,

        /// Comma-separated method tags (e.g. GET,POST,GET_BY_ID)
        #[arg(long, required_unless_present = "file")]
        methods: Option<String>,

        /// Mock data as JSON, or @path to read it from a file
        #[arg(long)]
        data: Option<String>,

        /// URL slug; derived from the name when omitted
        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Field of the first mock object used as the primary key
        #[arg(long = "primary-key")]
        primary_key: Option<String>,
    },

    /// Delete a resource
    Delete {
        /// Resource id
        id: String,
    },
}
