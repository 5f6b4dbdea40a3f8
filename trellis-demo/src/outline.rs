//! Indented, optionally coloured outline of a rendered tree.

use std::fmt::Write;

use crossterm::style::{Color as CtColor, Stylize};
use trellis::Theme;
use uidom::{Color, Element, Style};

pub struct Outline<'a> {
    theme: &'a Theme,
    color: bool,
    focused: Option<&'a str>,
}

impl<'a> Outline<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            color: true,
            focused: None,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn focused(mut self, id: Option<&'a str>) -> Self {
        self.focused = id;
        self
    }

    pub fn render(&self, root: &Element) -> String {
        let mut out = String::new();
        self.write_element(&mut out, root, 0);
        out
    }

    fn write_element(&self, out: &mut String, element: &Element, depth: usize) {
        let mut label = format!("{}#{}", element.tag, element.id);
        if let Some(role) = element.role {
            let _ = write!(label, " [{}]", role.as_str());
        }
        if !element.classes.is_empty() {
            let _ = write!(label, " .{}", element.classes);
        }
        if let Some(text) = element.content.text() {
            let _ = write!(label, " {text:?}");
        }
        if self.focused == Some(element.id.as_str()) {
            label.push_str(" *");
        }

        let style = self.theme.compute_style(element);
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), self.paint(label, &style));

        for child in element.child_elements() {
            self.write_element(out, child, depth + 1);
        }
    }

    fn paint(&self, label: String, style: &Style) -> String {
        if !self.color {
            return label;
        }

        let mut styled = label.stylize();
        if let Some(fg) = &style.foreground {
            styled = styled.with(terminal_color(fg));
        }
        if let Some(bg) = &style.background {
            styled = styled.on(terminal_color(bg));
        }
        if style.text_style.bold {
            styled = styled.bold();
        }
        if style.text_style.dim {
            styled = styled.dim();
        }
        if style.text_style.underline {
            styled = styled.underlined();
        }
        styled.to_string()
    }
}

/// Convert a resolved color for the terminal.
fn terminal_color(color: &Color) -> CtColor {
    let rgb = color.to_rgb();
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
