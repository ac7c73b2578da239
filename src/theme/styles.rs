//! Global CSS styles for the Chesed Machine.
//!
//! Warm pastel cards on a soft blue page, with a sky-blue call to action.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SKY (Primary actions) */
  --sky: #0EA5E9;
  --sky-soft: #1EAEDB;
  --sky-glow: rgba(14, 165, 233, 0.35);

  /* WARM (Cards) */
  --peach: #FFE5D9;
  --cream: #FFF9E6;
  --apricot: #FFB088;

  /* ACCENT */
  --violet: #8B5CF6;

  /* TEXT */
  --text-primary: #4B5563;
  --text-secondary: rgba(75, 85, 99, 0.75);
  --text-muted: rgba(75, 85, 99, 0.55);

  /* SURFACES */
  --page-top: #D3E4FD;
  --page-bottom: #F0F7FF;
  --surface: #ffffff;
  --danger: #e11d48;

  /* Typography */
  --font-sans: 'Nunito', 'Segoe UI', system-ui, sans-serif;

  /* Motion */
  --flip-duration: 800ms;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  /* Shape */
  --radius: 16px;
  --shadow: 0 10px 30px rgba(14, 165, 233, 0.12);
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: linear-gradient(180deg, var(--page-top) 0%, var(--page-bottom) 100%);
  min-height: 100vh;
  line-height: 1.5;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.6;
}

/* === Page === */
.page {
  max-width: 900px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
  position: relative;
}

.header-bar {
  display: flex;
  justify-content: flex-end;
}

.btn-info {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  font-size: 1.4rem;
  color: var(--sky);
  background: var(--surface);
  box-shadow: var(--shadow);
  transition: transform var(--transition-fast);
}

.btn-info:hover {
  transform: scale(1.08);
}

.page-title {
  text-align: center;
  font-size: 2.75rem;
  font-weight: 800;
  background: linear-gradient(90deg, var(--sky) 0%, var(--violet) 100%);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  margin-top: 0.5rem;
}

.tagline {
  text-align: center;
  color: var(--text-secondary);
  margin: 0.75rem auto 2rem;
  max-width: 34rem;
}

/* === Generator === */
.idea-generator {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.75rem;
}

.btn-generate {
  padding: 0.9rem 2.25rem;
  border-radius: 999px;
  font-size: 1.15rem;
  font-weight: 700;
  color: #ffffff;
  background: var(--sky);
  box-shadow: 0 8px 20px var(--sky-glow);
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-generate:hover {
  background: var(--sky-soft);
  transform: translateY(-2px);
}

.idea-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.25rem;
  width: 100%;
}

@media (max-width: 720px) {
  .idea-grid {
    grid-template-columns: 1fr;
  }
}

/* === Idea Card === */
.idea-card {
  position: relative;
  min-height: 11rem;
  padding: 1.5rem 1.25rem;
  border-radius: var(--radius);
  background: linear-gradient(160deg, var(--peach) 0%, var(--cream) 100%);
  border: 2px solid var(--apricot);
  box-shadow: var(--shadow);
  cursor: pointer;
  perspective: 1000px;
  transform-style: preserve-3d;
}

.idea-card--flipping {
  animation: card-flip var(--flip-duration) ease-in-out;
}

@keyframes card-flip {
  0%   { transform: rotateY(0deg); }
  50%  { transform: rotateY(90deg); }
  100% { transform: rotateY(0deg); }
}

.idea-card__regenerate {
  position: absolute;
  top: 0.6rem;
  right: 0.6rem;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  font-size: 1.1rem;
  color: var(--apricot);
  background: rgba(255, 255, 255, 0.7);
  transition: transform var(--transition-normal);
}

.idea-card__regenerate:hover {
  transform: rotate(180deg);
}

.idea-card__title {
  font-size: 0.85rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--violet);
  margin-bottom: 0.75rem;
}

.idea-card__content {
  font-size: 1.2rem;
  font-weight: 600;
}

/* === Commit Button === */
.btn-commit {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1rem 2.5rem;
  border-radius: var(--radius);
  font-size: 1.25rem;
  font-weight: 800;
  color: #ffffff;
  background: linear-gradient(90deg, var(--apricot) 0%, var(--violet) 100%);
  box-shadow: 0 8px 24px rgba(139, 92, 246, 0.3);
  transition: transform var(--transition-fast);
}

.btn-commit:hover {
  transform: scale(1.03);
}

.btn-commit__sub {
  font-size: 0.8rem;
  font-weight: 500;
  font-style: italic;
  opacity: 0.85;
}

/* === Counter === */
.ideas-counter {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.ideas-counter__value {
  font-size: 2.25rem;
  font-weight: 800;
  color: var(--sky);
}

.ideas-counter__label {
  font-size: 0.9rem;
  color: var(--text-muted);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(75, 85, 99, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 1rem;
}

.modal-content {
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: 0 20px 50px rgba(0, 0, 0, 0.18);
  padding: 2rem;
  width: 100%;
  max-width: 32rem;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 800;
  margin-bottom: 0.5rem;
}

.modal-description {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

/* === Share Modal === */
.share-modal__idea {
  padding: 1rem;
  border-radius: 12px;
  background: var(--cream);
  border: 1px dashed var(--apricot);
  font-weight: 600;
  margin-bottom: 1.25rem;
}

.share-modal__actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.25rem;
}

.share-modal__reminder {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.share-modal__form {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.share-modal__form label {
  font-size: 0.85rem;
  font-weight: 600;
}

.share-modal__form input {
  padding: 0.6rem 0.8rem;
  border-radius: 8px;
  border: 1px solid var(--page-top);
  font-family: inherit;
  font-size: 1rem;
}

.share-modal__form input:focus {
  outline: 2px solid var(--sky);
  border-color: transparent;
}

/* === Buttons === */
.btn-outline,
.btn-primary,
.btn-ghost {
  padding: 0.6rem 1.1rem;
  border-radius: 10px;
  font-weight: 600;
  text-decoration: none;
  text-align: center;
  transition: background var(--transition-fast);
}

.btn-outline {
  color: var(--sky);
  border: 1px solid var(--sky);
}

.btn-outline:hover {
  background: var(--page-bottom);
}

.btn-primary {
  color: #ffffff;
  background: var(--sky);
}

.btn-primary:hover {
  background: var(--sky-soft);
}

.btn-ghost {
  color: var(--text-secondary);
}

.btn-ghost:hover {
  background: var(--page-bottom);
}

/* === Welcome Modal === */
.welcome-modal {
  max-width: 36rem;
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
}

.welcome-modal__title {
  text-align: center;
  font-size: 1.6rem;
  font-weight: 800;
  color: var(--sky);
}

.welcome-modal__quote {
  text-align: center;
  font-style: italic;
  color: var(--text-muted);
}

.welcome-modal__callout {
  padding: 1rem;
  border-radius: 12px;
  background: var(--peach);
}

.welcome-modal__callout-title {
  font-weight: 800;
  color: var(--violet);
}

.welcome-modal__heading {
  font-weight: 700;
}

.welcome-modal__steps {
  padding-left: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.welcome-modal__warning {
  font-weight: 700;
  color: var(--danger);
}

.welcome-modal__email {
  text-align: center;
  font-weight: 700;
  color: var(--sky);
}

.welcome-modal__start {
  align-self: center;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 1100;
}

.toast {
  min-width: 16rem;
  max-width: 22rem;
  padding: 0.8rem 1rem;
  border-radius: 12px;
  background: var(--surface);
  border-left: 4px solid var(--sky);
  box-shadow: var(--shadow);
  cursor: pointer;
  animation: toast-in var(--transition-normal);
}

.toast--error {
  border-left-color: var(--danger);
}

.toast__title {
  font-weight: 700;
}

.toast__description {
  font-size: 0.9rem;
  color: var(--text-secondary);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to   { opacity: 1; transform: translateY(0); }
}
"#;
