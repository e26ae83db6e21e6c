use std::io;

use food_finder_core::{
    application::Service,
    domain::{
        export::ports::FileExporter,
        food::ports::CatalogClient,
        workflow::{
            debounce::Debouncer,
            services::SelectionWorkflow,
            value_objects::{Command, Completion},
        },
    },
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
    time::{Instant, sleep_until},
};

use super::{
    input::{HELP, UserAction},
    render::{render_food, render_search},
};

/// Line-oriented front-end: reads gestures line by line and prints the view.
///
/// Everything runs on one task. Catalog requests are spawned and report back
/// through a channel, so typing stays responsive while they are in flight.
pub struct Terminal<C, E>
where
    C: CatalogClient + 'static,
    E: FileExporter + 'static,
{
    service: Service<C, E>,
    workflow: SelectionWorkflow,
    keystrokes: Debouncer<String>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
    shown_generation: u64,
}

impl<C, E> Terminal<C, E>
where
    C: CatalogClient + 'static,
    E: FileExporter + 'static,
{
    pub fn new(service: Service<C, E>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let keystrokes = service.debouncer();

        Self {
            service,
            workflow: SelectionWorkflow::new(),
            keystrokes,
            completions_tx,
            completions_rx,
            in_flight: 0,
            shown_generation: 0,
        }
    }

    /// Drive the workflow from `input` until `:quit`, or until the input is
    /// exhausted and nothing is pending or in flight.
    pub async fn run<R>(&mut self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut stdin_open = true;

        println!("Food founder - enter a food name (:help for commands)");

        loop {
            if !stdin_open && !self.keystrokes.is_pending() && self.in_flight == 0 {
                break;
            }

            let deadline = self.keystrokes.deadline();

            tokio::select! {
                line = lines.next_line(), if stdin_open => match line {
                    Ok(Some(line)) => match line.parse::<UserAction>() {
                        Ok(UserAction::Quit) => break,
                        Ok(action) => self.handle(action).await,
                        Err(e) => eprintln!("{e}"),
                    },
                    Ok(None) => stdin_open = false,
                    // The offending line is consumed, so reading can go on.
                    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                        tracing::warn!(error = %e, "skipping unreadable input line");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "input closed after read error");
                        stdin_open = false;
                    }
                },
                Some(completion) = self.completions_rx.recv() => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.workflow.apply(completion);
                    self.render();
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(text) = self.keystrokes.take_ready(Instant::now()) {
                        let command = self.workflow.on_query_changed(text);
                        self.dispatch(command);
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle(&mut self, action: UserAction) {
        let command = match action {
            UserAction::Type(text) => {
                self.keystrokes.push(text);
                None
            }
            UserAction::Enter => self.workflow.press_enter(),
            UserAction::Pick(index) => self.workflow.select_suggestion(index),
            UserAction::Highlight(index) => {
                self.workflow.highlight(index);
                None
            }
            UserAction::GetImage => self.workflow.request_image(),
            UserAction::Toggle => {
                self.workflow.toggle_dropdown();
                None
            }
            UserAction::Blur => {
                self.workflow.hide_dropdown();
                None
            }
            UserAction::Close => {
                self.workflow.dismiss_error();
                None
            }
            UserAction::Save => {
                self.save().await;
                return;
            }
            UserAction::Help => {
                println!("{HELP}");
                return;
            }
            UserAction::Quit => return,
        };

        self.dispatch(command);
    }

    fn dispatch(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.in_flight += 1;

            let service = self.service.clone();
            let tx = self.completions_tx.clone();
            tokio::spawn(async move {
                let completion = service.perform(command).await;
                // The receiver only goes away when the terminal shuts down.
                let _ = tx.send(completion);
            });
        }

        self.render();
    }

    async fn save(&self) {
        let Some(food) = self.workflow.displayed() else {
            println!("nothing to download yet");
            return;
        };

        match self.service.export_displayed(food).await {
            Ok(path) => println!("saved {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "download failed");
                println!("download failed: {e}");
            }
        }
    }

    fn render(&mut self) {
        print!("{}", render_search(&self.workflow));

        if let Some(food) = self.workflow.displayed()
            && food.generation != self.shown_generation
        {
            self.shown_generation = food.generation;
            print!("{}", render_food(food));
        }
    }
}
