/// Font selection in effect while a span of input is parsed.
///
/// The parser keeps a stack of these. Groups, math segments and function
/// names push a copy and pop it when they close, so a font switch never
/// leaks past the enclosing `}`.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub font: String,
    pub font_class: String,
    pub fontsize: f32,
    pub dpi: f32,
}

impl State {
    pub fn new(font: &str, fontsize: f32, dpi: f32) -> Self {
        let mut state = Self {
            font: String::new(),
            font_class: "rm".to_string(),
            fontsize,
            dpi,
        };
        state.set_font(font);
        state
    }

    /// Switch fonts. The text faces `rm`, `it` and `bf` also become the
    /// letter class; other faces keep the class they inherit.
    pub fn set_font(&mut self, name: &str) {
        if matches!(name, "rm" | "it" | "bf") {
            self.font_class = name.to_string();
        }
        self.font = name.to_string();
    }
}
