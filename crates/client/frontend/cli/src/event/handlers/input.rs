//! Input handling (keyboard and mouse).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for terminal input and handle it.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.handle_click(column, row, terminal).await?;
                Ok(false)
            }
            TermEvent::Resize(_, _) => {
                self.redraw(terminal).await?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let dialog_open = self.view_model.endgame.is_some();
        match self.input.handle_key(key, dialog_open) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().info("Quitting...");
                self.redraw(terminal).await?;
                return Ok(true);
            }
            KeyAction::NewGame => self.start_new_game().await?,
            KeyAction::Adjust(adjustment) => adjustment.apply(&mut self.view_model.controls),
            KeyAction::ToggleEdit => {
                if let Err(locked) = self.view_model.toggle_edit() {
                    self.consumer.message_log_mut().warn(locked.to_string());
                }
            }
            KeyAction::ToggleTheme => {
                let next = self.view_model.theme.kind.toggle();
                // The palette arrives back as a Theme event.
                self.handle.set_theme(next).await?;
                return Ok(false);
            }
            KeyAction::Dismiss => {
                self.view_model.dismiss_endgame();
            }
            KeyAction::None => return Ok(false),
        }

        self.redraw(terminal).await?;
        Ok(false)
    }

    /// Resolve a left click in terminal cells to a board tile.
    async fn handle_click(&mut self, column: u16, row: u16, terminal: &mut Tui) -> Result<()> {
        if self.view_model.endgame.is_some() {
            return Ok(());
        }

        let tile = self
            .viewport
            .and_then(|viewport| viewport.cell_to_point(column, row))
            .and_then(|point| self.layout.tile_at(point, &self.view_model.grid));

        self.submit_click(tile, terminal).await
    }
}
