//! Browser-side tracing: a subscriber layer that renders events as
//! styled `console.log` lines, with the enclosing span chain inlined.

use tracing::span;
use tracing_subscriber::fmt::format::PrettyVisitor;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::prelude::*;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone)]
struct SpanFields(pub String);

pub struct ConsoleTracingLayer;

pub fn init() {
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::Registry::default().with(ConsoleTracingLayer),
    );
}

impl<S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>>
    tracing_subscriber::Layer<S> for ConsoleTracingLayer
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut spans_combined = String::new();
        {
            let mut span_text: Vec<String> = Vec::new();
            let mut current_span = ctx.current_span().id().and_then(|id| ctx.span(id));

            while let Some(span) = current_span {
                let name = span.metadata().name();
                let extensions = span.extensions();

                if let Some(fields) = extensions.get::<SpanFields>() {
                    span_text.push(format!("{}({})", name, fields.0));
                } else {
                    span_text.push(name.to_string());
                }

                current_span = span.parent();
            }

            if !span_text.is_empty() {
                spans_combined = span_text.iter().rev().fold(String::from(" "), |mut a, b| {
                    a += b;
                    a += " ";
                    a
                });
            }
        }

        let mut value = String::new();
        {
            let writer = Writer::new(&mut value);
            let mut visitor = PrettyVisitor::new(writer, true);
            event.record(&mut visitor);
        }

        let meta = event.metadata();
        let level = *meta.level();
        let origin = if level == tracing::Level::ERROR || level == tracing::Level::WARN {
            meta.file()
                .and_then(|file| meta.line().map(|ln| format!(" {}:{}", file, ln)))
                .unwrap_or_default()
        } else {
            String::new()
        };

        console_log4(
            format!("%c{level}%c{spans_combined}{origin}%c: {value}"),
            match level {
                tracing::Level::TRACE => "color: dodgerblue; background: #444",
                tracing::Level::DEBUG => "color: lawngreen; background: #444",
                tracing::Level::INFO => "color: whitesmoke; background: #444",
                tracing::Level::WARN => "color: orange; background: #444",
                tracing::Level::ERROR => "color: red; background: #444",
            },
            "color: inherit; font-weight: bold",
            "color: inherit",
        );
    }

    fn on_new_span(
        &self,
        attrs: &span::Attributes<'_>,
        id: &span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut fields = String::new();
        let writer = Writer::new(&mut fields);
        let mut visitor = PrettyVisitor::new(writer, true);
        attrs.record(&mut visitor);
        if !fields.is_empty() {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(SpanFields(fields));
            }
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log4(message1: String, message2: &str, message3: &str, message4: &str);
}
