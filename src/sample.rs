//! Built-in landing page used when no page file is supplied.
//!
//! `pages/landing.yaml` holds the same page in file form.

use crate::page::{Block, PageDescription, Section};
use crate::registry::{ButtonProps, ButtonVariant, Component, TextProps, TextTag};

fn text(children: &str, tag: TextTag, class_name: Option<&str>) -> Component {
    Component::Text(TextProps {
        children: Some(children.into()),
        tag,
        class_name: class_name.map(str::to_owned),
        ..TextProps::default()
    })
}

fn button(children: &str, variant: ButtonVariant, on_click: Option<&str>) -> Component {
    Component::Button(ButtonProps {
        children: Some(children.into()),
        variant,
        on_click: on_click.map(str::to_owned),
        ..ButtonProps::default()
    })
}

fn block(style: &str, components: Vec<Component>) -> Block {
    Block { style: Some(style.to_owned()), components }
}

fn section(style: &str, blocks: Vec<Block>) -> Section {
    Section { name: None, style: Some(style.to_owned()), blocks }
}

/// Three-section landing page: hero with calls to action, a feature band and
/// a footer line.
#[must_use]
pub fn landing_page() -> PageDescription {
    PageDescription {
        title: "Vite + React".to_owned(),
        description: "Vite + React + TypeScript + Tailwind CSS".to_owned(),
        url: "https://vitejs.dev/guide/features.html".to_owned(),
        image: "https://vitejs.dev/logo.svg".to_owned(),
        sections: vec![
            section(
                "flex flex-col bg-gray-900 text-white p-5",
                vec![
                    block(
                        "flex justify-center flex-col text-center text-white p-5",
                        vec![
                            text("Hello there", TextTag::H1, Some("text-6xl")),
                            text("Hello there", TextTag::P, Some("text-lg")),
                        ],
                    ),
                    block(
                        "flex items-center justify-center gap-3 text-white p-5",
                        vec![
                            button("Primary Call to action", ButtonVariant::Primary, Some("primary-cta")),
                            button("Secondary Call to action", ButtonVariant::Secondary, None),
                        ],
                    ),
                ],
            ),
            section(
                "flex bg-gray-800 text-white p-5",
                vec![block(
                    "w-full flex justify-center flex-col items-center",
                    vec![
                        text("Another section tile", TextTag::H2, Some("text-3xl")),
                        text("Another text Here", TextTag::P, Some("text-lg")),
                    ],
                )],
            ),
            section(
                "flex bg-gray-200 text-teal-950 p-5",
                vec![block("w-full", vec![text("Another section tile", TextTag::P, Some("text-center"))])],
            ),
        ],
    }
}
