use anyhow::Context;
use clap::Parser;
use folio_core::config::cli::Command;
use folio_core::core::hero::HeroFrame;
use folio_core::utils::logger;
use folio_core::{Catalog, CliConfig, FolioError, PortfolioConfig, Project};
use serde::Serialize;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let catalog = match PortfolioConfig::from_file(&config.config).and_then(Catalog::new) {
        Ok(catalog) => catalog,
        Err(e) => exit_with(&e),
    };

    let outcome = match &config.command {
        Command::List { category, featured } => {
            list_projects(&catalog, category, *featured, config.json)
        }
        Command::Show { slug, image } => show_case_study(&catalog, slug, *image, config.json),
        Command::About => show_about(&catalog, config.json),
        Command::Slugs if config.json => print_json(&catalog.slugs()),
        Command::Slugs => {
            for slug in catalog.slugs() {
                println!("{}", slug);
            }
            Ok(())
        }
        Command::Hero { seconds } => {
            run_hero(&catalog, Duration::from_secs(*seconds), config.json).await
        }
    };

    if let Err(e) = outcome {
        match e.downcast_ref::<FolioError>() {
            Some(folio_error) => exit_with(folio_error),
            None => return Err(e),
        }
    }

    Ok(())
}

fn exit_with(e: &FolioError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(if e.is_recoverable() { 2 } else { 1 });
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(FolioError::from)?;
    println!("{}", out);
    Ok(())
}

fn list_projects(
    catalog: &Catalog,
    category: &str,
    featured_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut filter = catalog.filter();
    filter.set_category(category);

    let visible: Vec<&Project> = filter
        .visible()
        .into_iter()
        .filter(|p| !featured_only || p.featured)
        .collect();

    if json {
        return print_json(&visible);
    }

    let tabs: Vec<String> = filter
        .tabs()
        .iter()
        .map(|tab| {
            if tab.selected {
                format!("[{}]", tab.category)
            } else {
                tab.category.to_string()
            }
        })
        .collect();
    println!("{}", tabs.join("  "));
    println!();

    if visible.is_empty() {
        println!("No projects in '{}'", filter.selected());
    }
    for project in visible {
        let star = if project.featured { "★" } else { " " };
        println!("{} {:<14} {:<12} {}", star, project.id, project.category, project.title);
        println!("    {}", project.description);
        if !project.tags.is_empty() {
            println!("    tags: {}", project.tags.join(", "));
        }
    }
    Ok(())
}

fn show_about(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let profile = catalog.profile();
    if json {
        return print_json(profile);
    }

    println!("{}", profile.name);
    println!("{}", profile.roles.join(" / "));
    println!();
    for skill in &profile.skills {
        let filled = usize::from(skill.level) / 5;
        println!(
            "  {:<26} {:<20} {:>3}%",
            skill.name,
            "#".repeat(filled),
            skill.level
        );
    }
    println!();
    for entry in &profile.experience {
        println!("  {}  {} @ {}", entry.year, entry.title, entry.company);
        println!("        {}", entry.description);
    }
    Ok(())
}

fn show_case_study(catalog: &Catalog, slug: &str, image: usize, json: bool) -> anyhow::Result<()> {
    let study = catalog.case_study(slug)?;
    let mut gallery = catalog.gallery(slug)?;
    gallery.jump_to(image)?;

    if json {
        return print_json(study);
    }

    println!("{} - {}", study.title, study.subtitle);
    println!();
    println!("{}", study.description);
    println!();
    println!("Challenge: {}", study.challenge);
    println!("Approach:  {}", study.approach);
    println!("Outcome:   {}", study.outcome);
    println!();
    for metric in &study.metrics {
        println!("  {:>8}  {} ({})", metric.value, metric.label, metric.description);
    }
    if let Some(testimonial) = &study.testimonial {
        println!();
        println!("  \"{}\"", testimonial.quote);
        println!("    - {}, {}", testimonial.author, testimonial.role);
    }

    println!();
    println!("Gallery ({} images):", gallery.len());
    for thumb in gallery.thumbnails() {
        let marker = if thumb.is_current { ">" } else { " " };
        println!("  {} {}. {}", marker, thumb.index, thumb.image);
    }
    println!();
    println!("Live: {}", study.live_url);
    println!("Code: {}", study.github_url);
    Ok(())
}

async fn run_hero(catalog: &Catalog, duration: Duration, json: bool) -> anyhow::Result<()> {
    let mut hero = catalog.hero().context("failed to build hero view")?;
    tracing::info!("🚀 Animating hero for {:?} (Ctrl-C to stop)", duration);
    hero.mount();

    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);
    let mut sampler = tokio::time::interval(Duration::from_millis(50));
    let mut last: Option<HeroFrame> = None;

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
            _ = sampler.tick() => {
                let frame = hero.frame();
                if last.as_ref() != Some(&frame) {
                    if json {
                        println!("{}", serde_json::to_string(&frame).map_err(FolioError::from)?);
                    } else {
                        println!("{:<24} | {}", frame.role, frame.headline);
                    }
                    last = Some(frame);
                }
            }
        }
    }

    hero.unmount();
    if !json {
        println!("{} - {}", catalog.profile().name, hero.frame().role);
    }
    Ok(())
}
