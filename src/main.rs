#![allow(dead_code)]

use crate::areas::repository::Repository;
use anyhow::Result;
use clap::{Parser, Subcommand};

mod areas;
mod artifacts;
mod commands;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A lightweight local version control system",
    long_about = "minigit tracks snapshots of the current directory in a local \
    content-addressed store. It supports staging, commits, branches, checkout, \
    unified diffs and three-way merges with conflict markers.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory."
    )]
    Init,
    #[command(
        name = "add",
        about = "Add a file to the staging area",
        long_about = "This command stages the specified file for inclusion in the next commit."
    )]
    Add {
        #[arg(index = 1, help = "The file to add to the staging area")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit from the staged files with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command walks the commit history from HEAD backwards, newest first."
    )]
    Log {
        #[arg(short = 'n', long, help = "Limit the number of commits shown")]
        max_count: Option<usize>,
    },
    #[command(
        name = "status",
        about = "Show the repository status",
        long_about = "This command shows the current branch and the state of every staged file."
    )]
    Status,
    #[command(
        name = "diff",
        about = "Show changes between snapshots",
        long_about = "Without arguments, compares the working tree to the staging area. \
        With --staged (or --cached), compares the staging area to HEAD. \
        With one commit id, compares the working tree to that commit; \
        with two, compares the two commits."
    )]
    Diff {
        #[arg(
            index = 1,
            allow_hyphen_values = true,
            help = "--staged, --cached, or a commit id"
        )]
        opt1: Option<String>,
        #[arg(index = 2, help = "A second commit id")]
        opt2: Option<String>,
    },
    #[command(
        name = "branch",
        about = "Create a branch, or list branches",
        long_about = "With a name, creates a branch pointing at the current HEAD commit. \
        Without arguments, lists all branches and marks the current one."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to another branch",
        long_about = "This command reconciles the working tree to the target branch's \
        snapshot and moves HEAD there. Staged changes must be committed first."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current one",
        long_about = "This command fast-forwards when possible and otherwise performs a \
        three-way merge, writing conflict markers into files both sides changed."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge in")]
        branch: String,
    },
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(pwd, Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => open_repository()?.init()?,
        Commands::Add { path } => open_repository()?.add(path)?,
        Commands::Commit { message } => {
            open_repository()?.commit(message)?;
        }
        Commands::Log { max_count } => {
            open_repository()?.log(*max_count)?;
        }
        Commands::Status => {
            open_repository()?.status()?;
        }
        Commands::Diff { opt1, opt2 } => {
            open_repository()?.diff(opt1.as_deref(), opt2.as_deref())?;
        }
        Commands::Branch { name } => {
            let repository = open_repository()?;
            match name {
                Some(name) => repository.branch(name)?,
                None => repository.list_branches()?,
            }
        }
        Commands::Checkout { branch } => open_repository()?.checkout(branch)?,
        Commands::Merge { branch } => {
            open_repository()?.merge(branch)?;
        }
    }

    Ok(())
}
