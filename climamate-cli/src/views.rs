use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, Timelike};
use climamate_core::{
    Appearance, Config, LocationQuery, Notification, NotificationLevel, Page, ViewKind, WeatherProvider,
    render::{Scene, render_home, render_landing},
    trivia::{HOME_FACTS, LANDING_FACTS, spawn_rotator},
};
use inquire::{InquireError, Select, Text};

/// Shared state that outlives a single view.
#[derive(Debug)]
pub struct ViewContext {
    pub config: Config,
    pub provider: Arc<dyn WeatherProvider>,
    pub appearance: Appearance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Landing,
    Home,
    Quit,
}

/// A line typed at the home prompt.
#[derive(Debug, PartialEq, Eq)]
enum HomeInput<'a> {
    Back,
    Quit,
    ToggleTheme,
    Search(&'a str),
}

impl<'a> HomeInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":back" => HomeInput::Back,
            ":quit" | ":q" => HomeInput::Quit,
            ":theme" => HomeInput::ToggleTheme,
            // Blank input is passed through so the page can reject it.
            _ => HomeInput::Search(line),
        }
    }
}

fn hour_now() -> u32 {
    Local::now().hour()
}

fn draw(frame: &str) {
    println!();
    print!("{frame}");
}

fn show_notifications(notifications: Vec<Notification>) {
    for n in notifications {
        match n.level {
            NotificationLevel::Success => println!("✔ {}", n.message),
            NotificationLevel::Error => println!("✖ {}", n.message),
        }
    }
}

/// Counts a rotation and reports whether the `ticks` limit was reached.
fn rotated(seen: &mut u32, ticks: Option<u32>) -> bool {
    *seen += 1;
    ticks.is_some_and(|limit| *seen >= limit)
}

/// Landing view. Rotates trivia until Ctrl-C or `ticks` rotations, then asks where to go.
///
/// The fetch-on-mount runs alongside the rotation, so the first frame and the trivia
/// never wait on the network.
pub async fn landing(ctx: &ViewContext, ticks: Option<u32>) -> anyhow::Result<Navigation> {
    let mut page = Page::new(ViewKind::Landing, Arc::clone(&ctx.provider));
    let rotator = spawn_rotator(LANDING_FACTS, ctx.config.trivia_interval(), page.child_token());
    let mut rotations = rotator.subscribe();

    let frame = |page: &Page| {
        render_landing(&Scene {
            page,
            trivia: rotator.current(),
            appearance: ctx.appearance,
            hour: hour_now(),
        })
    };
    draw(&frame(&page));
    println!("(Ctrl-C to continue)");

    let query = match LocationQuery::parse(&ctx.config.default_city) {
        Ok(query) => Some(query),
        Err(err) => {
            tracing::error!(%err, "no default city configured for the landing view");
            None
        }
    };

    let mut seen = 0u32;
    let mut leave = false;

    if let Some(query) = query {
        let fetched = {
            let request = page.request(&query);
            tokio::pin!(request);

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break None,
                    fetched = &mut request => break Some(fetched),
                    changed = rotations.changed() => {
                        if changed.is_err() {
                            break None;
                        }
                        rotations.borrow_and_update();
                        draw(&frame(&page));
                        if rotated(&mut seen, ticks) {
                            break None;
                        }
                    }
                }
            }
        };

        match fetched {
            Some(fetched) => {
                page.apply(&query, fetched);
                draw(&frame(&page));
            }
            None => leave = true,
        }
    }

    while !leave {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => leave = true,
            changed = rotations.changed() => {
                if changed.is_err() {
                    break;
                }
                rotations.borrow_and_update();
                draw(&frame(&page));
                leave = rotated(&mut seen, ticks);
            }
        }
    }

    page.unmount();
    rotator.stop().await;

    if ticks.is_some() {
        return Ok(Navigation::Quit);
    }

    let choice = tokio::task::spawn_blocking(|| {
        Select::new("Where to?", vec!["Get Weather", "Quit"]).prompt()
    })
    .await
    .context("Navigation prompt task failed")?;

    match choice {
        Ok("Get Weather") => Ok(Navigation::Home),
        Ok(_) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Navigation::Quit)
        }
        Err(err) => Err(err).context("Failed to read navigation choice"),
    }
}

/// Home view: prompt for cities until the user navigates away.
pub async fn home(ctx: &mut ViewContext) -> anyhow::Result<Navigation> {
    let mut page = Page::new(ViewKind::Home, Arc::clone(&ctx.provider));
    let rotator = spawn_rotator(HOME_FACTS, ctx.config.trivia_interval(), page.child_token());

    let mut loading = page.watch_loading();
    let spinner = tokio::spawn(async move {
        while loading.changed().await.is_ok() {
            if *loading.borrow_and_update() {
                println!("Loading…");
            }
        }
    });

    let render = |page: &Page, appearance: Appearance, trivia: Option<&str>| {
        render_home(&Scene { page, trivia, appearance, hour: hour_now() })
    };
    draw(&render(&page, ctx.appearance, rotator.current()));
    println!("Enter a city, or :theme, :back, :quit");

    let next = loop {
        let prompt = tokio::task::spawn_blocking(|| {
            Text::new("City:").with_placeholder("Enter city name").prompt()
        })
        .await
        .context("City prompt task failed")?;

        let line = match prompt {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                break Navigation::Quit;
            }
            Err(err) => return Err(err).context("Failed to read city"),
        };

        match HomeInput::parse(&line) {
            HomeInput::Back => break Navigation::Landing,
            HomeInput::Quit => break Navigation::Quit,
            HomeInput::ToggleTheme => {
                ctx.appearance = ctx.appearance.toggle();
                tracing::debug!(appearance = %ctx.appearance, "appearance toggled");
            }
            HomeInput::Search(city) => {
                page.submit(city).await;
                show_notifications(page.take_notifications());
            }
        }

        // The prompt owns the terminal between inputs, so trivia is not redrawn on
        // its own; each frame shows whichever fact the rotator is on at that moment.
        draw(&render(&page, ctx.appearance, rotator.current()));
    };

    page.unmount();
    rotator.stop().await;
    drop(page);
    if let Err(err) = spinner.await {
        tracing::warn!(error = %err, "loading indicator task ended abnormally");
    }

    Ok(next)
}

/// `home --city`: one lookup, one frame, no prompt.
pub async fn lookup_once(ctx: &ViewContext, city: &str) -> anyhow::Result<()> {
    let mut page = Page::new(ViewKind::Home, Arc::clone(&ctx.provider));
    page.submit(city).await;
    show_notifications(page.take_notifications());

    let trivia = HOME_FACTS.first().copied();
    print!(
        "{}",
        render_home(&Scene { page: &page, trivia, appearance: ctx.appearance, hour: hour_now() })
    );
    page.unmount();

    Ok(())
}
