//! Admin dashboard flows: load the two panels and delete students.

use crate::admin::{AdminRenderer, Panel};
use crate::client::{Client, Transport};
use crate::config::RenderOptions;

/// Notice shown when a delete request got no readable answer.
pub const DELETE_FAILURE: &str = "An error occurred while deleting the student.";

/// Current HTML of the student and chat-log panels.
///
/// A panel is `None` until it has been loaded once.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    renderer: AdminRenderer,
    students: Option<String>,
    chat_logs: Option<String>,
}

impl Dashboard {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: AdminRenderer::new(options),
            students: None,
            chat_logs: None,
        }
    }

    #[must_use]
    pub fn panel(&self, panel: Panel) -> Option<&str> {
        match panel {
            Panel::Students => self.students.as_deref(),
            Panel::ChatLogs => self.chat_logs.as_deref(),
        }
    }

    /// Fetch and render the student panel.
    pub fn load_students<T: Transport>(&mut self, client: &Client<T>) -> &str {
        let html = match client.students() {
            Ok(students) => {
                log::debug!("loaded {} student(s)", students.len());
                self.renderer.student_list(&students)
            }
            Err(err) => {
                log::warn!("error loading students: {err}");
                Panel::Students.error_html().to_string()
            }
        };
        self.students.insert(html)
    }

    /// Fetch and render the chat-log panel.
    pub fn load_chat_logs<T: Transport>(&mut self, client: &Client<T>) -> &str {
        let html = match client.chat_logs() {
            Ok(logs) => {
                log::debug!("loaded {} chat log entr(ies)", logs.len());
                self.renderer.chat_logs(&logs)
            }
            Err(err) => {
                log::warn!("error loading chat logs: {err}");
                Panel::ChatLogs.error_html().to_string()
            }
        };
        self.chat_logs.insert(html)
    }

    /// Delete a student after the admin confirmed.
    ///
    /// Returns the notice to show, or `None` when not confirmed (nothing is
    /// sent). A successful delete reloads the student panel.
    pub fn delete_student<T: Transport>(
        &mut self,
        client: &Client<T>,
        id: i64,
        confirmed: bool,
    ) -> Option<String> {
        if !confirmed {
            return None;
        }

        match client.delete_student(id) {
            Ok(outcome) => {
                if outcome.success {
                    log::info!("deleted student {id}");
                    self.load_students(client);
                } else {
                    log::debug!("delete of student {id} refused: {}", outcome.message);
                }
                Some(outcome.message)
            }
            Err(err) => {
                log::warn!("error deleting student {id}: {err}");
                Some(DELETE_FAILURE.to_string())
            }
        }
    }
}
