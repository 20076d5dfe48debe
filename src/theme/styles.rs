//! Global CSS styles for the contact page.

pub const PAGE_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUNDS */
  --page-background: #F7F7F2;
  --card-band: #001514;
  --placeholder: #414A4C;

  /* TEXT */
  --text-primary: #001514;
  --text-muted: rgba(0, 21, 20, 0.6);

  /* ACCENT */
  --accent: #3182ce;

  /* Typography */
  --font-heading: 'Montserrat', 'Helvetica Neue', sans-serif;
  --font-body: 'Open Sans', 'Helvetica Neue', sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--page-background);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === About page === */
.about {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 2rem 1rem;
}

.about-header {
  text-align: center;
  margin-bottom: 1rem;
}

.page-title {
  font-family: var(--font-heading);
  font-size: 2rem;
  font-weight: 700;
}

.page-subtitle {
  color: var(--text-muted);
}

.card-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
  width: 100%;
  max-width: 72rem;
}
"#;
