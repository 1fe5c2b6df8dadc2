//! Interactive terminal front end.

pub mod input;
pub mod view;

use std::io;
use std::sync::Arc;

use crossterm::{event, execute, terminal};
use ratatui::prelude::*;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::generation::{RoadmapGenerator, SimulatedGenerator};

/// Run the form until the user quits.
///
/// Raw mode and the alternate screen are restored on every exit path,
/// including errors from the loop.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let generator: Arc<dyn RoadmapGenerator> = Arc::new(SimulatedGenerator::new(config.delay()));
    let mut app = App::new(generator, config.ui.title.clone());

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    info!(delay_ms = config.generation.delay_ms, "form opened");
    let result = event_loop(&mut term, &mut app, config).await;

    terminal::disable_raw_mode()?;
    execute!(term.backend_mut(), terminal::LeaveAlternateScreen)?;
    term.show_cursor()?;
    info!(
        completed = app.session().completed_generations(),
        "form closed"
    );
    result
}

async fn event_loop<B: Backend>(
    term: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    let tick = config.tick();
    loop {
        app.drain_completions();
        term.draw(|f| view::draw(f, app))?;

        if event::poll(tick)? {
            if let event::Event::Key(k) = event::read()? {
                if let Some(action) = input::map_key(k, app.session().alert().is_some()) {
                    app.handle(action);
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit() {
            break;
        }
        // Let spawned generation tasks make progress between polls
        tokio::task::yield_now().await;
    }
    Ok(())
}
