//! Renderers for the engine's segment stream (spec.md §6 "Output renderer
//! contract"). The engine emits abstract segment kinds; each renderer owns
//! the visual mapping. Every renderer here accepts the same
//! `&[AnnotatedParagraph]` stream — a monochrome or machine-readable
//! renderer must not need anything more than that (spec.md §9 "Renderer
//! coupling").

pub mod html;
pub mod terminal;
