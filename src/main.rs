use clap::Parser;
use job_matcher::utils::{logger, validation::Validate};
use job_matcher::{CliConfig, LocalStorage, MatchEngine, MatchError, MatchingPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if cli.log_json || file.as_ref().is_some_and(|f| f.json_logs()) {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting job-matcher");
    let config = cli.resolve(file.as_ref());
    tracing::debug!("Run config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = MatchingPipeline::new(LocalStorage::default(), config);
    let engine = MatchEngine::new_with_monitoring(pipeline, monitor_enabled);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - inputs are loaded but not ranked");
        match engine.inspect().await {
            Ok(input) => {
                println!(
                    "✅ {} candidates and {} jobs loaded",
                    input.candidates.len(),
                    input.jobs.len()
                );
            }
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(bundle) => {
            let formats = engine.pipeline().config().output_formats.clone();
            if formats.iter().any(|f| f == "text") {
                print!("{}", bundle.text);
            }
            tracing::info!(
                "✅ Ranked {} matches across {} jobs",
                bundle.match_count,
                bundle.job_count
            );
            for path in &bundle.written_files {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &MatchError) -> ! {
    tracing::error!(
        "❌ Matching run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
