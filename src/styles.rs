//! Application Stylesheet
//!
//! Static CSS owned by the presentation layer as a whole. The root
//! component renders it once; components only reference class names.

const BASE: &str = r#"
:root {
  --color-primary: #4f46e5;
  --color-secondary: #10b981;
  --color-dark: #1f2937;
  --color-text: #374151;
  --color-light: #f3f4f6;
  --color-white: #ffffff;
  --color-border: #e5e7eb;
  --color-error: #dc2626;
  --color-success: #059669;
  --border-radius: 0.75rem;
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --transition-speed: 0.2s;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  background-color: var(--color-light);
  color: var(--color-text);
  line-height: 1.5;
}
"#;

const LAYOUT: &str = r#"
.app-header { background-color: var(--color-primary); color: var(--color-white); }
.app-header h1 { text-align: center; font-size: 1.5rem; padding: 1rem 0; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
.main-app-grid { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
@media (max-width: 900px) { .main-app-grid { grid-template-columns: 1fr; } }
.section-title { margin-bottom: 1.5rem; font-size: 1.75rem; }
.form-section .section-title { text-align: center; font-size: 2rem; }
.list-title { margin: 2rem 0 1rem; font-size: 1.5rem; }
"#;

const CARD: &str = r#"
.card {
  padding: 1.5rem;
  border-radius: var(--border-radius);
  box-shadow: var(--shadow-lg);
  transition: box-shadow var(--transition-speed);
  margin-bottom: 1.5rem;
  background-color: var(--color-white);
  color: var(--color-text);
  animation: card-enter 0.4s ease-out;
}
.card.reverse { background-color: var(--color-dark); color: var(--color-white); }
.card:hover {
  box-shadow: 0 15px 25px -5px rgba(0, 0, 0, 0.15), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
}
@keyframes card-enter {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;

const FORM: &str = r#"
.form-heading { margin-bottom: 1.5rem; text-align: center; color: var(--color-primary); }
.form-control { margin-bottom: 1rem; display: flex; flex-direction: column; gap: 0.25rem; }
.form-control input, .form-control textarea {
  padding: 0.75rem;
  border: 1px solid var(--color-border);
  border-radius: 0.5rem;
  font: inherit;
}
.form-control textarea { min-height: 120px; resize: vertical; }
.contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.contact-row .form-control { margin: 0; }
.form-actions { text-align: center; margin-top: 2rem; }
.btn { padding: 0.75rem 2rem; border: none; border-radius: 0.5rem; font-weight: 600; cursor: pointer; }
.btn-primary { background-color: var(--color-primary); color: var(--color-white); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
"#;

const RATING_BAR: &str = r#"
.rating-bar-selector {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
  padding: 0.5rem;
  border-radius: var(--border-radius);
  background-color: var(--color-light);
}
.rating-option {
  flex-grow: 1;
  text-align: center;
  padding: 0.75rem 0.5rem;
  border: none;
  border-radius: 0.5rem;
  color: var(--color-white);
  cursor: pointer;
  opacity: 0.6;
  transition: all 0.2s ease;
  font-weight: 500;
  line-height: 1.2;
}
.rating-option:hover { opacity: 0.8; transform: scale(1.05); }
.rating-option:disabled { cursor: not-allowed; }
.rating-option.selected { opacity: 1; transform: scale(1.02); box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2); }
.rating-option .emoji { display: block; font-size: 1.5rem; }
.rating-option .label { font-size: 0.75rem; }
"#;

const CAROUSEL: &str = r#"
.feedback-carousel {
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  padding-bottom: 1rem;
  margin-bottom: 1rem;
  max-height: 400px;
  -ms-overflow-style: none;
  scrollbar-width: none;
}
.feedback-carousel::-webkit-scrollbar { display: none; }
.feedback-carousel-inner { display: flex; gap: 1.5rem; padding: 0.5rem; }
.carousel-item-wrapper { flex: 0 0 320px; scroll-snap-align: start; }
.rating-display-inline {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 0;
  margin-bottom: 0.75rem;
  border-bottom: 1px solid var(--color-border);
}
.rating-display-inline .emoji { font-size: 1.5rem; }
.rating-display-inline .label { font-weight: 700; font-size: 1.1rem; }
.feedback-comment { font-size: 1.1rem; }
.feedback-author {
  margin-top: 1rem;
  padding-top: 0.5rem;
  border-top: 1px dashed var(--color-border);
  font-size: 0.9rem;
  color: var(--color-dark);
}
.feedback-email { margin-left: 1rem; opacity: 0.7; }
"#;

const STATS: &str = r#"
.feedback-stats { padding: 1rem; text-align: center; }
.stats-average { font-size: 2.5rem; margin: 0 0 0.5rem; color: var(--color-primary); }
.stats-count { font-size: 1.2rem; color: var(--color-dark); font-weight: 600; }
.stats-positive { margin-top: 1rem; padding: 0.5rem; border: 1px solid var(--color-border); border-radius: 0.5rem; }
.stats-positive-label { font-size: 0.9rem; margin-bottom: 0.25rem; }
.stats-bar { height: 8px; background-color: var(--color-border); border-radius: 4px; }
.stats-bar-fill { height: 100%; background-color: var(--color-secondary); border-radius: 4px; transition: width 0.5s ease-out; }
"#;

const MESSAGES: &str = r#"
.message-error { color: var(--color-error); text-align: center; margin-top: 1rem; animation: fade-in 0.3s; }
.message-success { color: var(--color-success); text-align: center; margin-top: 1rem; animation: fade-in 0.3s; }
.message-info { text-align: center; color: var(--color-dark); }
.message-loading { text-align: center; }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
"#;

/// Named sections in cascade order
pub const SECTIONS: &[(&str, &str)] = &[
    ("base", BASE),
    ("layout", LAYOUT),
    ("card", CARD),
    ("form", FORM),
    ("rating-bar", RATING_BAR),
    ("carousel", CAROUSEL),
    ("stats", STATS),
    ("messages", MESSAGES),
];

/// The full stylesheet
pub fn stylesheet() -> String {
    SECTIONS
        .iter()
        .map(|(name, css)| format!("/* {} */{}", name, css))
        .collect()
}
