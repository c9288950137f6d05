use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use svc::areas::repository::Repository;
use svc::artifacts::merge::resolution::Resolution;
use svc::config::Config;
use svc::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "svc",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple version control system",
    long_about = "A small single-user version control system. \
    Files are tracked by a cheap checksum, commits snapshot the tracked files \
    and branches can be created, switched, reset and merged.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repo",
        global = true,
        help = "Run as if started in this directory"
    )]
    repo: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the storage directory and an empty master branch."
    )]
    Init,
    #[command(
        name = "add",
        about = "Start tracking files",
        long_about = "This command adds files to the index. \
        Directories are expanded into every file below them. \
        Paths are relative to the repository root."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to track")]
        paths: Vec<String>,
    },
    #[command(
        name = "rm",
        about = "Stop tracking a file",
        long_about = "This command removes a file from the index. The working file is kept."
    )]
    Rm {
        #[arg(index = 1)]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the tracked files into a new commit on the active branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "Without a name this command lists every branch. \
        With a name it creates a branch at the current head."
    )]
    Branch {
        #[arg(index = 1)]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to another branch",
        long_about = "This command switches the active branch and restores its tracked files."
    )]
    Checkout {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the active branch to a commit",
        long_about = "This command moves the active branch to any commit and restores its tracked files, \
        discarding uncommitted changes to them."
    )]
    Reset {
        #[arg(index = 1, help = "The 6 digit commit id")]
        commit: String,
    },
    #[command(
        name = "merge",
        about = "Merge another branch into the active one",
        long_about = "This command merges a branch into the active one. \
        Conflicts keep the active side unless resolved with -r: \
        `-r path` drops the file, `-r path=replacement` copies the replacement over it."
    )]
    Merge {
        #[arg(index = 1)]
        branch: String,
        #[arg(short, long = "resolve", help = "A conflict resolution, path[=replacement]")]
        resolutions: Vec<String>,
    },
    #[command(
        name = "show",
        about = "Describe a commit",
        long_about = "This command prints a commit, its changes against its parent and its tracked files."
    )]
    Show {
        #[arg(index = 1, help = "The 6 digit commit id")]
        commit: String,
    },
    #[command(name = "log", about = "Show the history of the active branch")]
    Log,
    #[command(name = "status", about = "Report whether there are uncommitted changes")]
    Status,
}

fn main() -> Result<()> {
    init_logging("warn");

    let cli = Cli::parse();
    let root = match cli.repo {
        Some(repo) => repo,
        None => std::env::current_dir()?,
    };
    let config = Config::from_env(root);

    let mut repository = match cli.command {
        Commands::Init => Repository::new(config, Box::new(std::io::stdout())),
        _ => Repository::open(config, Box::new(std::io::stdout()))?,
    };
    repository.set_color(std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none());

    match &cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { paths } => {
            for path in expand_paths(&repository, paths)? {
                repository.add(&path)?;
            }
            repository.save()?;
        }
        Commands::Rm { path } => {
            repository.remove(path)?;
            repository.save()?;
        }
        Commands::Commit { message } => {
            let commit_id = repository.commit(message)?;
            repository.save()?;

            println!(
                "[{} {}] {}",
                repository.head_branch().name(),
                commit_id,
                message
            );
        }
        Commands::Branch { name: None } => {
            repository.list_branches()?;
        }
        Commands::Branch { name: Some(name) } => {
            repository.branch(name)?;
            repository.save()?;
        }
        Commands::Checkout { name } => {
            repository.checkout(name)?;
            repository.save()?;
        }
        Commands::Reset { commit } => {
            repository.reset(commit)?;
            repository.save()?;
        }
        Commands::Merge {
            branch,
            resolutions,
        } => {
            let resolutions = resolutions
                .iter()
                .map(|resolution| Resolution::parse(resolution))
                .collect::<Vec<_>>();

            repository.merge(branch, &resolutions)?;
            repository.save()?;
        }
        Commands::Show { commit } => {
            repository.show(commit)?;
        }
        Commands::Log => {
            repository.log()?;
        }
        Commands::Status => {
            if repository.status()? {
                println!("nothing to commit, index matches {}", repository.head_branch().name());
            } else {
                println!("changes not committed on {}", repository.head_branch().name());
            }
        }
    }

    Ok(())
}

// directories expand into every untracked file below them; anything else is
// kept as is so that a tracked or missing file is still reported
fn expand_paths(repository: &Repository, paths: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::new();

    for path in paths {
        if path.is_empty() || Path::new(path).is_absolute() {
            expanded.push(path.clone());
            continue;
        }

        let path = match path.trim_end_matches('/') {
            "." => "",
            path => path,
        };
        let is_dir = path.is_empty() || repository.workspace().resolve(path).is_dir();
        if !is_dir {
            expanded.push(path.to_string());
            continue;
        }

        let untracked = repository
            .workspace()
            .list_files(Path::new(path))?
            .into_iter()
            .filter(|file| !repository.index().is_tracked(file));
        expanded.extend(untracked);
    }

    Ok(expanded)
}
