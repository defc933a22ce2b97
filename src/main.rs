use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use portfolio::{
    Catalog, Navigator, Session, ViewKind,
    terminal::{self, TerminalPresenter},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartView {
    Home,
    About,
    Project,
}

impl From<StartView> for ViewKind {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Home => ViewKind::Home,
            StartView::About => ViewKind::About,
            StartView::Project => ViewKind::ProjectDetail,
        }
    }
}

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Browse the portfolio: project list, case studies, about page and contact card")]
struct Cli {
    /// View to start on
    #[arg(long, value_enum, default_value = "home")]
    view: StartView,

    /// Project to open (implies --view project)
    #[arg(long, value_name = "ID")]
    project: Option<String>,

    /// Load content from a TOML catalog instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Print the starting page and exit
    #[arg(long)]
    once: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Open the desktop window (requires the `gui` feature)
    #[arg(long)]
    gui: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let view = if args.project.is_some() {
        ViewKind::ProjectDetail
    } else {
        args.view.into()
    };
    let navigator = Navigator::starting_at(view, args.project.clone());
    let year = OffsetDateTime::now_utc().year();

    if args.gui {
        #[cfg(feature = "gui")]
        {
            return portfolio::gui::run(catalog, navigator, year).map_err(anyhow::Error::from);
        }
        #[cfg(not(feature = "gui"))]
        {
            anyhow::bail!("this build has no GUI; rebuild with `--features gui`");
        }
    }

    let stdout = std::io::stdout();
    let interactive = stdout.is_terminal();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async move {
        let mut session =
            Session::with_navigator(catalog, navigator, TerminalPresenter::new(stdout, interactive));
        if args.once {
            terminal::print_once(&mut session, year);
            Ok(())
        } else {
            tracing::info!("type `help` for commands");
            terminal::run(&mut session, year).await
        }
    })
}
