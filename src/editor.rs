//! Text editor module
//!
//! A small text buffer backing the URL, headers and body fields. It keeps a
//! byte cursor that always sits on a UTF-8 boundary and supports:
//! - Cursor movement (left/right/up/down, line start/end, buffer start/end)
//! - Multi-line editing (single-line editors drop line breaks)
//! - Select-all, with the next edit replacing the selection
//! - Copy/cut/paste text exchange (the clipboard itself lives in the UI layer)
//! - JSON prettify for request bodies

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

/// An editable text field
#[derive(Debug, Clone)]
pub struct TextEditor {
    /// The content being edited
    content: String,

    /// Cursor position (byte offset in content)
    cursor: usize,

    /// Whether the content has been modified since creation
    dirty: bool,

    /// Whether Enter inserts a line break
    multiline: bool,

    /// Whole buffer selected (Ctrl+A)
    all_selected: bool,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::multi_line()
    }
}

impl TextEditor {
    /// Editor for a one-line field such as the URL
    pub fn single_line() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            dirty: false,
            multiline: false,
            all_selected: false,
        }
    }

    /// Editor for free-form text such as headers or a body
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::single_line()
        }
    }

    /// Same editor with initial content and the cursor at the end
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        let content = self.sanitize(content.into());
        self.cursor = content.len();
        self.content = content;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn has_selection(&self) -> bool {
        self.all_selected && !self.content.is_empty()
    }

    /// Clear all content and reset state
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.all_selected = false;
        self.dirty = true;
    }

    /// Set content (replaces all existing content)
    pub fn set_content(&mut self, content: String) {
        let content = self.sanitize(content);
        self.cursor = content.len();
        self.content = content;
        self.all_selected = false;
        self.dirty = true;
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            self.insert_newline();
            return;
        }
        self.delete_selection();
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
        self.dirty = true;
    }

    /// Insert a line break; ignored by single-line editors
    pub fn insert_newline(&mut self) -> bool {
        if !self.multiline {
            return false;
        }
        self.delete_selection();
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert(cursor, '\n');
        self.cursor = cursor + 1;
        self.dirty = true;
        true
    }

    /// Insert a string at the current cursor position
    pub fn insert_str(&mut self, s: &str) {
        let text = self.sanitize(s.to_string());
        self.delete_selection();
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert_str(cursor, &text);
        self.cursor = cursor + text.len();
        self.dirty = true;
    }

    /// Insert pasted text, converting curly quotes to straight ones
    pub fn insert_str_normalized(&mut self, s: &str) {
        let normalized = s
            .replace('\u{201C}', "\"") // Left double quote
            .replace('\u{201D}', "\"") // Right double quote
            .replace('\u{2018}', "'") // Left single quote
            .replace('\u{2019}', "'"); // Right single quote

        self.insert_str(&normalized);
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }

        let start = self.prev_boundary(self.cursor);
        self.content.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.dirty = true;
        true
    }

    /// Delete the character after the cursor (delete key)
    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.content.len() {
            return false;
        }

        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.remove(cursor);
        self.dirty = true;
        true
    }

    /// Move cursor to the left by one character
    pub fn move_cursor_left(&mut self) -> bool {
        self.all_selected = false;
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary(self.cursor);
        true
    }

    /// Move cursor to the right by one character
    pub fn move_cursor_right(&mut self) -> bool {
        self.all_selected = false;
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor = self.next_boundary(self.cursor);
        true
    }

    /// Move to the same column on the previous line
    pub fn move_cursor_up(&mut self) -> bool {
        self.all_selected = false;
        let start = self.line_start(self.cursor);
        if start == 0 {
            return false;
        }
        let column = self.content[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
        true
    }

    /// Move to the same column on the next line
    pub fn move_cursor_down(&mut self) -> bool {
        self.all_selected = false;
        let end = self.line_end(self.cursor);
        if end >= self.content.len() {
            return false;
        }
        let column = self.content[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, column);
        true
    }

    pub fn move_cursor_to_line_start(&mut self) {
        self.all_selected = false;
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_cursor_to_line_end(&mut self) {
        self.all_selected = false;
        self.cursor = self.line_end(self.cursor);
    }

    /// Move cursor to start of content
    pub fn move_cursor_to_start(&mut self) {
        self.all_selected = false;
        self.cursor = 0;
    }

    /// Move cursor to end of content
    pub fn move_cursor_to_end(&mut self) {
        self.all_selected = false;
        self.cursor = self.content.len();
    }

    pub fn select_all(&mut self) {
        self.all_selected = true;
        self.cursor = self.content.len();
    }

    pub fn clear_selection(&mut self) -> bool {
        std::mem::replace(&mut self.all_selected, false)
    }

    /// Text that Ctrl+C would copy: the selection, else the cursor's line
    pub fn copy_text(&self) -> String {
        if self.has_selection() {
            return self.content.clone();
        }
        let start = self.line_start(self.cursor);
        let end = self.line_end(self.cursor);
        self.content[start..end].to_string()
    }

    /// Remove and return the selection, else the cursor's whole line
    pub fn cut(&mut self) -> String {
        if self.has_selection() {
            let text = std::mem::take(&mut self.content);
            self.cursor = 0;
            self.all_selected = false;
            self.dirty = true;
            return text;
        }

        let start = self.line_start(self.cursor);
        let end = self.line_end(self.cursor);
        let text = self.content[start..end].to_string();
        // Take the line break with it so no blank line is left behind
        let remove_end = if end < self.content.len() { end + 1 } else { end };
        let remove_start = if remove_end == end && start > 0 { start - 1 } else { start };
        self.content.replace_range(remove_start..remove_end, "");
        self.cursor = remove_start.min(self.content.len());
        self.dirty = true;
        text
    }

    /// Format content as JSON (prettify)
    /// Returns Ok(()) if formatting succeeded, Err with the parse error if invalid JSON
    pub fn format_json(&mut self) -> Result<(), String> {
        match serde_json::from_str::<Value>(&self.content) {
            Ok(json) => {
                let pretty = serde_json::to_string_pretty(&json).map_err(|e| e.to_string())?;
                self.set_content(pretty);
                Ok(())
            }
            Err(e) => Err(format!("Invalid JSON: {e}")),
        }
    }

    /// Zero-based (line, column) of the cursor, column counted in characters
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.clamp_cursor_to_boundary(self.cursor)];
        let line = before.matches('\n').count();
        let column = before
            .rsplit('\n')
            .next()
            .map(|l| l.chars().count())
            .unwrap_or(0);
        (line, column)
    }

    /// Handle a key event - returns true if the event was handled
    ///
    /// Clipboard shortcuts are not handled here; the caller owns the clipboard
    /// and uses `copy_text`, `cut` and `insert_str_normalized`.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Home if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Home => {
                self.move_cursor_to_line_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_line_end();
                true
            }
            KeyCode::Esc => self.clear_selection(),
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.select_all();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Drop the selected text; true if anything was selected
    fn delete_selection(&mut self) -> bool {
        if !self.clear_selection() || self.content.is_empty() {
            return false;
        }
        self.content.clear();
        self.cursor = 0;
        self.dirty = true;
        true
    }

    /// Normalize line breaks to `\n`, or strip them in single-line mode
    fn sanitize(&self, text: String) -> String {
        if !text.contains(['\r', '\n']) {
            return text;
        }
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.multiline {
            unified
        } else {
            unified.replace('\n', "")
        }
    }

    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.content[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.content.len())
    }

    /// Byte offset of `column` characters into the line starting at `start`
    fn offset_in_line(&self, start: usize, column: usize) -> usize {
        let end = self.line_end(start);
        self.content[start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.content.len()).saturating_sub(1);
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut pos = pos + 1;
        while pos < self.content.len() && !self.content.is_char_boundary(pos) {
            pos += 1;
        }
        pos.min(self.content.len())
    }

    /// Clamp cursor to valid UTF-8 character boundary
    fn clamp_cursor_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}
