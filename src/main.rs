use blog_e2e::core::{fixtures, harness, report};
use blog_e2e::utils::error::{E2eError, ErrorSeverity};
use blog_e2e::utils::{logger, validation::Validate};
use blog_e2e::{BlogApiClient, CliConfig, Command, Marker, Settings};
use clap::Parser;
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(config.command).await {
        std::process::exit(report_failure(&e));
    }
}

/// Prints the error with its suggestion and returns the exit code.
fn report_failure(error: &anyhow::Error) -> i32 {
    match error.chain().find_map(|c| c.downcast_ref::<E2eError>()) {
        Some(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            if e.severity() == ErrorSeverity::Low {
                0
            } else {
                e.exit_code()
            }
        }
        None => {
            tracing::error!("❌ Command failed: {:#}", error);
            eprintln!("❌ {:#}", error);
            1
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let settings = Settings::load()?;

    match command {
        Command::Env => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Check => check(&settings).await?,
        Command::Prepare => {
            settings.validate()?;
            harness::create_artifact_dirs(&settings)?;
            for dir in harness::ARTIFACT_DIRS {
                println!("📁 {}", settings.artifact_dir(dir).display());
            }
        }
        Command::Markers => {
            for marker in Marker::ALL {
                println!("{:<14} {}", marker.as_str(), marker.description());
            }
        }
        Command::Seed { posts } => seed(&settings, posts).await?,
        Command::Report { path } => {
            let path = path.unwrap_or_else(|| {
                settings
                    .artifact_dir("reports")
                    .join(report::REPORT_FILE_NAME)
            });
            let summary = report::summarize(&path)?;
            println!("📊 {}", path.display());
            println!(
                "Total: {}  ✅ {}  ❌ {}  ⏭️ {}  (pass rate {:.1}%)",
                summary.total,
                summary.passed,
                summary.failed,
                summary.skipped,
                summary.pass_rate()
            );
            if summary.malformed > 0 {
                println!("⚠️ {} malformed lines ignored", summary.malformed);
            }
            for id in &summary.failed_ids {
                println!("  ❌ {}", id);
            }
        }
        Command::Clean => {
            let removed = clean_dir(&settings.artifact_dir("screenshots"))?
                + clean_dir(&settings.artifact_dir("logs/videos"))?;
            println!("🧹 Removed {} artifacts", removed);
        }
    }
    Ok(())
}

async fn check(settings: &Settings) -> anyhow::Result<()> {
    settings.validate()?;
    println!("✅ Configuration valid ({})", settings.environment);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(settings.timeouts.api_request))
        .build()
        .map_err(E2eError::from)?;

    for (label, url) in [
        ("UI", settings.urls.base_ui.as_str()),
        ("API", settings.urls.base_api.as_str()),
    ] {
        // Any HTTP answer counts as reachable; only transport errors fail.
        let response = client.get(url).send().await.map_err(E2eError::from)?;
        tracing::info!("🌐 {} {} -> {}", label, url, response.status());
        println!("✅ {} reachable: {} ({})", label, url, response.status());
    }

    for (label, creds) in [("existing user", &settings.existing_user), ("admin", &settings.admin)] {
        if creds.is_valid() {
            println!("🔐 {} credentials configured", label);
        } else {
            println!("ℹ️ {} credentials not configured, dependent tests will skip", label);
        }
    }
    Ok(())
}

async fn seed(settings: &Settings, posts: usize) -> anyhow::Result<()> {
    settings.validate()?;
    let api = BlogApiClient::from_settings(settings)?;
    let user = fixtures::api_as_user(&api, settings).await?;
    let created = fixtures::test_posts(&api, &user, posts).await?;
    for post in &created {
        println!("📝 {} {}", post.id, post.title);
    }
    fixtures::logout(&api).await?;
    println!("✅ Seeded {}/{} posts for {}", created.len(), posts, user.email);
    Ok(())
}

fn clean_dir(dir: &Path) -> std::io::Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
        removed += 1;
    }
    tracing::info!("🧹 Cleaned {} ({} entries)", dir.display(), removed);
    Ok(removed)
}
