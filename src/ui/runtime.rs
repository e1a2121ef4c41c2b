use std::time::Duration;

use crate::config::ConfigStore;
use crate::ui::app::{App, LaunchScreen, Step};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub async fn run(
    store: ConfigStore,
    screen: LaunchScreen,
    forced_grid_size: u16,
) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let width = terminal.size()?.width;
    let mut app = App::new(store, forced_grid_size, width);
    app.launch(screen)?;
    let mut events = EventHandler::new(Duration::from_millis(50));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match app.next_step(&mut events).await {
            Step::Input(Some(AppEvent::Key(key))) => handle_key(&mut app, key),
            Step::Input(Some(AppEvent::Resize(cols, _rows))) => app.on_resize(cols),
            Step::Input(None) => break,
            Step::Edit(completion) => app.apply_completion(completion),
            Step::Prompt(request) => app.modal_mut().enqueue(request),
            Step::Host(event) => app.on_host_event(event),
        }
    }

    drop(guard);
    Ok(())
}
