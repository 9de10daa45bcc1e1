// SPDX-License-Identifier: MPL-2.0
use admin_console::app::{paths, ListScreen, Screen, ScreenState, Session};
use admin_console::application::validation::Validate;
use admin_console::config::{self, Config};
use admin_console::domain::Entity;
use admin_console::i18n::fluent::I18n;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
Usage: admin_console [OPTIONS]

Options:
  --resource <users|products>  Collection to load (default: users)
  --base-url <URL>             API base URL (overrides settings.toml)
  --lang <LOCALE>              Message language, e.g. en-US or fr
  --config-dir <DIR>           Directory holding settings.toml
  -h, --help                   Print this help
";

struct Flags {
    resource: Screen,
    base_url: Option<String>,
    lang: Option<String>,
    config_dir: Option<String>,
}

fn parse_resource(value: &str) -> Result<Screen, String> {
    match value {
        "users" => Ok(Screen::Users),
        "products" => Ok(Screen::Products),
        other => Err(format!("unknown resource `{other}`")),
    }
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        resource: args
            .opt_value_from_fn("--resource", parse_resource)?
            .unwrap_or(Screen::Users),
        base_url: args.opt_value_from_str("--base-url")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir);

    let mut config = config::load().unwrap_or_else(|err| {
        warn!(%err, "failed to load settings, using defaults");
        Config::default()
    });
    if let Some(base_url) = flags.base_url {
        config.api.base_url = base_url;
    }

    let i18n = I18n::new(flags.lang, &config);
    info!(locale = %i18n.current_locale(), base_url = %config.api.base_url, "starting");

    let session = match Session::new(config, i18n) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "failed to initialize HTTP client");
            return ExitCode::FAILURE;
        }
    };

    match session.open(flags.resource) {
        Ok(ScreenState::Users(screen)) => load(screen).await,
        Ok(ScreenState::Products(screen)) => load(screen).await,
        Ok(other) => {
            error!(screen = ?other.screen(), "not a list screen");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "failed to open screen");
            ExitCode::FAILURE
        }
    }
}

async fn load<E>(mut screen: ListScreen<E>) -> ExitCode
where
    E: Entity,
    E::Patch: Validate,
    E::Draft: Validate,
{
    let status = match screen.refresh().await {
        Ok(total) => {
            let page = screen.page_info();
            info!(total, pages = page.total_pages, "collection loaded");
            for row in screen.rows() {
                info!(id = %row.item.id(), favorited = row.favorited, item = ?row.item);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "collection load failed");
            ExitCode::FAILURE
        }
    };

    for toast in screen.notifications().visible() {
        info!(kind = toast.kind().as_str(), text = toast.text(), "toast");
    }
    status
}
