//! Global CSS styles for Dancing with Lions.
//!
//! Saharan dusk aesthetic: night backgrounds, sand text, gold titles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night-deep: #120f0a;
  --night-soft: #1a1510;
  --night-border: #2a2218;

  /* SAND (Surfaces, Text) */
  --sand: #e8dcc8;
  --sand-dim: rgba(232, 220, 200, 0.7);
  --sand-faint: rgba(232, 220, 200, 0.45);

  /* GOLD (Titles, Emphasis) */
  --gold: #d4a24e;
  --gold-glow: rgba(212, 162, 78, 0.35);

  /* TERRACOTTA (Accents, Markers) */
  --terracotta: #b3541e;
  --terracotta-soft: rgba(179, 84, 30, 0.5);

  /* OASIS (Links, Active States) */
  --oasis: #4e9a8f;
  --oasis-glow: rgba(78, 154, 143, 0.3);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.25rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 700ms cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--night-deep);
  color: var(--sand);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.65;
  scroll-behavior: smooth;
}

a {
  color: var(--oasis);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

/* === Reveal-on-Scroll === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

/* === Hero === */
.hero {
  min-height: 52vh;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 4rem 2.5rem 3rem;
  background: radial-gradient(ellipse at 30% 20%, var(--night-soft) 0%, var(--night-deep) 70%);
  border-bottom: 1px solid var(--night-border);
}

.hero-kicker {
  font-size: var(--text-sm);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--sand-faint);
  margin-bottom: 1rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--gold);
  line-height: 1.1;
  max-width: 18ch;
}

.hero-tagline {
  margin-top: 1.25rem;
  font-size: var(--text-lg);
  color: var(--sand-dim);
  max-width: 55ch;
}

/* === Page Sections === */
.page {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 2.5rem 4rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--gold);
  margin: 3rem 0 1rem;
}

.body-text {
  color: var(--sand-dim);
  max-width: 68ch;
  margin-bottom: 1rem;
}

/* === Story Index === */
.story-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
  margin-top: 2rem;
}

.story-card {
  display: block;
  padding: 1.5rem;
  border: 1px solid var(--night-border);
  border-radius: 8px;
  background: var(--night-soft);
  transition: border-color var(--transition-normal), transform var(--transition-normal);
}

.story-card:hover {
  border-color: var(--gold);
  transform: translateY(-2px);
  text-decoration: none;
}

.story-card-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--sand);
}

.story-card-tagline {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--sand-faint);
}

.story-card-meta {
  margin-top: 1rem;
  font-size: var(--text-xs);
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--sand-faint);
}

/* === Filter Chips === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 1.5rem 0;
}

.filter-chip {
  padding: 0.35rem 1rem;
  border: 1px solid var(--night-border);
  border-radius: 999px;
  font-size: var(--text-sm);
  color: var(--sand-dim);
  transition: all var(--transition-fast);
}

.filter-chip:hover {
  border-color: var(--sand-dim);
}

.filter-chip.active {
  color: var(--night-deep);
  background: var(--gold);
  border-color: var(--gold);
}

/* === Timeline === */
.timeline {
  border-left: 2px solid var(--night-border);
  margin: 1rem 0 2rem;
}

.timeline-entry {
  position: relative;
  padding: 0.75rem 0 0.75rem 1.75rem;
  cursor: pointer;
}

.timeline-entry::before {
  content: '';
  position: absolute;
  left: -7px;
  top: 1.35rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--night-border);
  transition: background var(--transition-fast);
}

.timeline-entry:hover::before,
.timeline-entry.focused::before {
  background: var(--gold);
}

.timeline-year {
  font-size: var(--text-xs);
  letter-spacing: 0.2em;
  color: var(--sand-faint);
}

.timeline-name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--sand);
}

.timeline-entry.focused .timeline-name {
  color: var(--gold);
}

.timeline-detail {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--sand-dim);
  max-width: 52ch;
}

.empty-state {
  padding: 2rem;
  border: 1px dashed var(--night-border);
  border-radius: 8px;
  text-align: center;
  color: var(--sand-faint);
  font-style: italic;
}

/* === Map === */
.map-shell {
  position: relative;
  border: 1px solid var(--night-border);
  border-radius: 8px;
  overflow: hidden;
  background: linear-gradient(160deg, #1d1812 0%, #14110c 60%, #0f0d09 100%);
  aspect-ratio: 4 / 3;
}

.map-layer {
  position: absolute;
  inset: 0;
  will-change: transform;
  transition-property: transform;
  transition-timing-function: cubic-bezier(0.33, 1, 0.68, 1);
}

.map-paths {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.map-marker {
  position: absolute;
  width: 14px;
  height: 14px;
  border-radius: 50%;
  border: 2px solid var(--night-deep);
  transform: translate(-50%, -50%);
  transition: opacity var(--transition-normal), width var(--transition-fast), height var(--transition-fast);
}

.map-marker.dimmed {
  opacity: 0.25;
}

.map-marker.focused {
  width: 20px;
  height: 20px;
  box-shadow: 0 0 0 6px var(--gold-glow);
}

.map-veil {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(18, 15, 10, 0.7);
  color: var(--sand-faint);
  font-style: italic;
}

.map-placeholder {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  height: 100%;
  color: var(--sand-faint);
  text-align: center;
  padding: 2rem;
}

.map-placeholder-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--sand-dim);
}

.map-reset {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--night-border);
  border-radius: 4px;
  background: rgba(18, 15, 10, 0.8);
  color: var(--sand-dim);
  font-size: var(--text-xs);
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.map-reset:hover {
  border-color: var(--gold);
  color: var(--gold);
}

/* === Story Layout === */
.story-columns {
  display: grid;
  grid-template-columns: minmax(0, 5fr) minmax(0, 4fr);
  gap: 2.5rem;
  align-items: start;
}

.story-columns .map-column {
  position: sticky;
  top: 2rem;
}

@media (max-width: 900px) {
  .story-columns {
    grid-template-columns: 1fr;
  }
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--night-border);
  margin-top: 4rem;
  padding: 2rem 2.5rem;
  font-size: var(--text-sm);
  color: var(--sand-faint);
  text-align: center;
}

.not-found {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}
"#;
