//! Browser terminal
//!
//! DOM plumbing for the shell session: builds the page skeleton, renders
//! the scrollback into `<pre>` lines, routes keyboard input (Enter submits,
//! arrows walk history, Tab completes) and runs the footer uptime clock.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

use crate::clock;
use crate::shell::{Effect, LineKind, Session, TermLine};
use crate::text::{Span, TextStyle};

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::new());
    static UI: RefCell<Option<Ui>> = const { RefCell::new(None) };
}

/// DOM handles the render and event paths need after init.
struct Ui {
    wrapper: Element,
    screen: Element,
    scrollback: Element,
    input: HtmlInputElement,
    footer: Element,
}

/// Build the page and wire up events.
pub fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let wrapper = document.create_element("div")?;
    wrapper.set_class_name("terminal-wrapper");

    let frame = document.create_element("div")?;
    frame.set_class_name("terminal-frame");

    // Titlebar with the three dots
    let titlebar = document.create_element("div")?;
    titlebar.set_class_name("titlebar");
    for color in ["red", "yellow", "green"] {
        let dot = document.create_element("span")?;
        dot.set_class_name(&format!("dot {}", color));
        titlebar.append_child(&dot)?;
    }
    let title = document.create_element("span")?;
    title.set_class_name("title");
    title.set_text_content(Some("Welcome to my portfolio"));
    titlebar.append_child(&title)?;

    // Screen: scrollback, prompt row, hint
    let screen = document.create_element("div")?;
    screen.set_class_name("screen");

    let scrollback = document.create_element("div")?;
    scrollback.set_class_name("lines");

    let input_row = document.create_element("div")?;
    input_row.set_class_name("input-row");

    let prompt = document.create_element("span")?;
    prompt.set_class_name("prompt");
    let prompt_text = SESSION.with(|s| s.borrow().prompt().to_string());
    prompt.set_text_content(Some(&prompt_text));

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_class_name("term-input");
    input.set_attribute("autocomplete", "off")?;
    input.set_attribute("spellcheck", "false")?;
    input.set_attribute("aria-label", "terminal input")?;

    input_row.append_child(&prompt)?;
    input_row.append_child(&input)?;

    let hint = document.create_element("div")?;
    hint.set_class_name("hint small");
    hint.set_text_content(Some(
        "Try 'help' \u{2022} history \u{2191}/\u{2193} \u{2022} autocomplete Tab",
    ));

    screen.append_child(&scrollback)?;
    screen.append_child(&input_row)?;
    screen.append_child(&hint)?;

    frame.append_child(&titlebar)?;
    frame.append_child(&screen)?;
    wrapper.append_child(&frame)?;

    let footer = document.create_element("footer")?;
    footer.set_class_name("footer");

    body.append_child(&wrapper)?;
    body.append_child(&footer)?;

    let theme = SESSION.with(|s| s.borrow().theme());
    wrapper.set_attribute("data-theme", theme.as_str())?;

    UI.with(|ui| {
        *ui.borrow_mut() = Some(Ui {
            wrapper,
            screen: screen.clone(),
            scrollback,
            input: input.clone(),
            footer,
        });
    });

    render();
    update_uptime();

    setup_key_handler(&input)?;
    setup_focus_handler(&screen)?;
    setup_uptime_clock(&window)?;

    let _ = input.focus();
    Ok(())
}

/// Keyboard handling on the input element.
fn setup_key_handler(input: &HtmlInputElement) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        handle_key(&event);
    }) as Box<dyn FnMut(_)>);

    input.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn handle_key(event: &KeyboardEvent) {
    match event.key().as_str() {
        "Enter" => {
            let raw = with_input(|input| input.value());
            with_input(|input| input.set_value(""));
            SESSION.with(|s| s.borrow_mut().submit(&raw));
            render();
            apply_effects();
        }
        "ArrowUp" => {
            event.prevent_default();
            let current = with_input(|input| input.value());
            if let Some(older) = SESSION.with(|s| s.borrow_mut().history_prev(&current)) {
                with_input(|input| input.set_value(&older));
            }
        }
        "ArrowDown" => {
            event.prevent_default();
            if let Some(newer) = SESSION.with(|s| s.borrow_mut().history_next()) {
                with_input(|input| input.set_value(&newer));
            }
        }
        "Tab" => {
            event.prevent_default();
            let current = with_input(|input| input.value());
            if let Some(completed) = SESSION.with(|s| s.borrow_mut().complete(&current)) {
                with_input(|input| input.set_value(&completed));
            }
            // Candidate listings land in the scrollback
            render();
        }
        _ => {}
    }
}

/// Clicking anywhere on the screen refocuses the input.
fn setup_focus_handler(screen: &Element) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(move || {
        with_input(|input| {
            let _ = input.focus();
        });
    }) as Box<dyn FnMut()>);

    screen.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Footer clock, ticking once a second.
fn setup_uptime_clock(window: &web_sys::Window) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(update_uptime) as Box<dyn FnMut()>);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        1000,
    )?;
    callback.forget();
    Ok(())
}

fn update_uptime() {
    UI.with(|ui| {
        if let Some(ui) = ui.borrow().as_ref() {
            let text = format!(
                "System uptime: {}",
                clock::format_uptime(clock::uptime_secs())
            );
            ui.footer.set_text_content(Some(&text));
        }
    });
}

fn with_input<R>(f: impl FnOnce(&HtmlInputElement) -> R) -> R
where
    R: Default,
{
    UI.with(|ui| {
        ui.borrow()
            .as_ref()
            .map(|ui| f(&ui.input))
            .unwrap_or_default()
    })
}

/// Perform UI requests queued by commands.
fn apply_effects() {
    let effects = SESSION.with(|s| s.borrow_mut().take_effects());
    for effect in effects {
        match effect {
            Effect::ThemeChanged(theme) => {
                UI.with(|ui| {
                    if let Some(ui) = ui.borrow().as_ref() {
                        let _ = ui.wrapper.set_attribute("data-theme", theme.as_str());
                    }
                });
            }
            Effect::OpenUrl(url) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target_and_features(
                        &url,
                        "_blank",
                        "noopener,noreferrer",
                    );
                }
            }
        }
    }
}

/// Rebuild the scrollback DOM from the session and pin the view to the
/// bottom. The buffer is capped, so a full rebuild stays cheap.
fn render() {
    UI.with(|ui| {
        let ui = ui.borrow();
        let Some(ui) = ui.as_ref() else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Replace all children
        ui.scrollback.set_text_content(Some(""));

        SESSION.with(|s| {
            let session = s.borrow();
            for term_line in session.lines() {
                if let Ok(pre) = render_line(&document, term_line) {
                    let _ = ui.scrollback.append_child(&pre);
                }
            }
        });

        ui.screen.set_scroll_top(ui.screen.scroll_height());
    });
}

fn render_line(document: &Document, term_line: &TermLine) -> Result<Element, JsValue> {
    let pre = document.create_element("pre")?;
    pre.set_class_name(match term_line.kind {
        LineKind::Input => "line input",
        LineKind::Output => "line",
        LineKind::Error => "line error",
    });

    if term_line.line.is_empty() {
        // Keep blank lines from collapsing
        pre.set_text_content(Some("\u{a0}"));
        return Ok(pre);
    }

    for span in &term_line.line.spans {
        pre.append_child(&render_span(document, span)?)?;
    }
    Ok(pre)
}

fn render_span(document: &Document, span: &Span) -> Result<Element, JsValue> {
    let element = match &span.link {
        Some(url) => {
            let anchor = document.create_element("a")?;
            anchor.set_attribute("href", url)?;
            anchor.set_attribute("target", "_blank")?;
            anchor.set_attribute("rel", "noreferrer")?;
            anchor
        }
        None => document.create_element("span")?,
    };

    if let Some(class) = style_class(span.style) {
        element.set_class_name(class);
    }
    element.set_text_content(Some(&span.text));
    Ok(element)
}

fn style_class(style: TextStyle) -> Option<&'static str> {
    match style {
        TextStyle::Plain => None,
        TextStyle::Bold => Some("b"),
        TextStyle::Emphasis => Some("em"),
        TextStyle::Heading => Some("h"),
        TextStyle::Code => Some("code"),
        TextStyle::Dim => Some("dim"),
    }
}
