//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Full redraw, then report the drawn board to the host.
    pub(in crate::event) async fn redraw(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            messages: self.consumer.message_log(),
            layout: &self.layout,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };
        self.viewport = ui::render(terminal, &ctx)?;

        if !self.view_model.grid.is_empty() {
            self.handle.sync_grid(self.view_model.grid.clone()).await?;
        }
        Ok(())
    }
}
