//! Stylesheet for the card components.
//!
//! Hosts include it once, e.g. `style { {CARD_STYLES} }`.

pub const CARD_STYLES: &str = r#"
/* === Card frame === */
.contact-card {
  display: flex;
  flex-direction: column;
  margin: 5% auto;
  max-width: 279px;
  max-height: 322px;
  text-decoration: none;
  cursor: pointer;
}

@media (min-width: 30em) {
  .contact-card {
    max-width: 342px;
  }
}

/* === Image === */
.card-image {
  display: flex;
  width: 100%;
  min-height: 220px;
  position: relative;
  overflow: hidden;
}

.card-image__img {
  width: 100%;
  object-fit: cover;
}

.card-no-image {
  max-width: 342px;
  max-height: 220px;
}

.card-no-image__inner {
  display: flex;
  justify-content: center;
  align-items: center;
}

/* === Text band === */
.card-text {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  padding: 1rem;
  text-align: center;
}

.card-title {
  margin: 0;
  font-weight: 600;
}

.card-blurb {
  padding: 0.5rem;
  margin: 0;
}

/* === Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding-top: 3.75rem;
  background: rgba(0, 0, 0, 0.48);
  z-index: 1400;
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 28rem;
  background: #ffffff;
  border-radius: 0.25rem;
  box-shadow: 0 7px 14px 0 rgba(0, 0, 0, 0.1), 0 3px 6px 0 rgba(0, 0, 0, 0.07);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
}

.modal-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.modal-body {
  padding: 0.5rem 1.5rem;
}

.modal-footer {
  display: flex;
  justify-content: flex-end;
  padding: 1rem 1.5rem;
}

/* === Buttons === */
.btn-primary {
  background: #3182ce;
  color: #ffffff;
  border: none;
  border-radius: 0.25rem;
  padding: 0.5rem 1rem;
  font-weight: 600;
  cursor: pointer;
}

.btn-primary:hover {
  background: #2b6cb0;
}

.m-3 {
  margin: 0.75rem;
}

.icon-btn {
  background: transparent;
  border: none;
  font-size: 1.25rem;
  line-height: 1;
  cursor: pointer;
}
"#;
