//! Rendering tests for the contact card components
//!
//! Each test mounts a small root component in a `VirtualDom`, builds it
//! once and inspects the server-rendered HTML.

#![allow(non_snake_case)]

use std::cell::Cell;

use contactcard_ui::*;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use proptest::prelude::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Props for a root that renders one `ContactCard`
#[derive(Clone, PartialEq, Props)]
struct CardHostProps {
    title: String,
    public_id: Option<String>,
    cloud_name: Option<String>,
    variant: CardVariant,
}

fn CardHost(props: CardHostProps) -> Element {
    rsx! {
        ContactCard {
            title: props.title,
            blurb: "blurb".to_string(),
            public_id: props.public_id,
            cloud_name: props.cloud_name,
            variant: props.variant,
        }
    }
}

fn render_card(props: CardHostProps) -> String {
    let mut dom = VirtualDom::new_with_props(CardHost, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._+-]{0,20}(@[a-z0-9-]{1,12}\\.[a-z]{2,6})?")
        .expect("valid regex")
}

thread_local! {
    static IMAGE_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// Renderer that records how often it is asked for an image
struct CountingImage;

impl ImageRenderer for CountingImage {
    fn render(&self, cloud_name: Option<&str>, public_id: &str) -> Element {
        IMAGE_CALLS.with(|calls| calls.set(calls.get() + 1));
        let cloud = cloud_name.unwrap_or("none");
        rsx! {
            span { class: "counted-image", "{cloud}/{public_id}" }
        }
    }
}

// ============================================================================
// Variant selection
// ============================================================================

fn VolunteerApp() -> Element {
    rsx! {
        ContactCard {
            title: "Volunteer".to_string(),
            blurb: "Join us".to_string(),
        }
    }
}

#[test]
fn volunteer_card_with_no_image() {
    let html = render(VolunteerApp);

    assert!(html.contains("No image available"));
    assert!(html.contains("Volunteer</h5>"));
    assert!(html.contains("Join us</p>"));
    assert!(html.contains(r#"href="https://discord.com/invite/272XMuv""#));
    assert!(html.contains(r#"target="_blank""#));
}

fn MailtoApp() -> Element {
    rsx! {
        ContactCard {
            title: "General inquiries".to_string(),
            blurb: "Drop us a line".to_string(),
            variant: CardVariant::Mailto { email: "support@example.org".to_string() },
        }
    }
}

#[test]
fn mailto_card_links_to_address() {
    let html = render(MailtoApp);

    assert!(html.contains(r#"href="mailto:support@example.org""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(!html.contains("discord.com"));
}

fn BothFlagsApp() -> Element {
    let variant = CardVariant::from_flags(
        true,
        true,
        Some("Business owners".to_string()),
        Some("support@example.org".to_string()),
    );

    rsx! {
        ContactCard {
            title: "Business owners".to_string(),
            blurb: "Partner with us".to_string(),
            variant,
        }
    }
}

#[test]
fn modal_wins_when_both_flags_set() {
    let html = render(BothFlagsApp);

    assert!(html.contains("modal-card"));
    assert!(html.contains(r##"href="#""##));
    assert!(!html.contains("mailto:"));
    // Dialog starts closed
    assert!(!html.contains("Some text here"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The rendered mailto anchor is the scheme followed by the address
    #[test]
    fn rendered_mailto_target_is_exact(email in email_strategy()) {
        let html = render_card(CardHostProps {
            title: "General inquiries".to_string(),
            public_id: None,
            cloud_name: None,
            variant: CardVariant::from_flags(false, true, None, Some(email.clone())),
        });

        let expected = format!(r#"href="mailto:{}""#, email);
        prop_assert!(html.contains(&expected), "missing {} in {}", expected, html);
        prop_assert!(html.contains(r#"target="_blank""#));
    }

    /// The rendered volunteer anchor always points at the invite
    #[test]
    fn rendered_volunteer_target_ignores_other_props(
        title in "[A-Za-z ]{0,30}",
        public_id in proptest::option::of("[a-z/]{0,12}"),
        cloud_name in proptest::option::of("[a-z]{1,8}"),
        email in proptest::option::of(email_strategy()),
        modal_title in proptest::option::of("[A-Za-z ]{0,20}"),
    ) {
        let html = render_card(CardHostProps {
            title,
            public_id,
            cloud_name,
            variant: CardVariant::from_flags(false, false, modal_title, email),
        });

        let expected = format!(r#"href="{}""#, VOLUNTEER_INVITE_URL);
        prop_assert!(html.contains(&expected));
        prop_assert!(!html.contains("mailto:"));
    }

    /// With the modal flag set the card is an in-page trigger, never a link away
    #[test]
    fn rendered_modal_card_wins_over_mailto(
        mailto in any::<bool>(),
        email in proptest::option::of(email_strategy()),
    ) {
        let html = render_card(CardHostProps {
            title: "Business owners".to_string(),
            public_id: None,
            cloud_name: None,
            variant: CardVariant::from_flags(true, mailto, None, email),
        });

        prop_assert!(html.contains("modal-card"));
        prop_assert!(html.contains(r##"href="#""##));
        prop_assert!(!html.contains("mailto:"));
        prop_assert!(!html.contains(r#"target="_blank""#));
    }
}

// ============================================================================
// Dialog
// ============================================================================

thread_local! {
    static DIALOG: Cell<Option<Disclosure>> = const { Cell::new(None) };
}

fn DialogCycleApp() -> Element {
    let disclosure = use_disclosure();
    DIALOG.with(|slot| slot.set(Some(disclosure)));

    rsx! {
        div { class: "host",
            ModalForm { disclosure, title: "Business owners".to_string() }
        }
    }
}

fn with_dialog(dom: &VirtualDom, action: impl FnOnce(&mut Disclosure)) {
    dom.in_runtime(|| {
        let mut disclosure = DIALOG.with(Cell::get).expect("dialog mounted");
        action(&mut disclosure);
    });
}

#[test]
fn dialog_opens_and_closes_through_disclosure() {
    let mut dom = VirtualDom::new(DialogCycleApp);
    dom.rebuild_in_place();
    assert!(!dioxus_ssr::render(&dom).contains("Some text here"));

    with_dialog(&dom, |d| d.on_open());
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Some text here"));
    assert!(html.contains("Business owners</h2>"));
    with_dialog(&dom, |d| assert!(d.is_open()));

    // Second open request leaves it open
    with_dialog(&dom, |d| d.on_open());
    dom.render_immediate(&mut NoOpMutations);
    assert!(dioxus_ssr::render(&dom).contains("Some text here"));

    with_dialog(&dom, |d| d.on_close());
    dom.render_immediate(&mut NoOpMutations);
    assert!(!dioxus_ssr::render(&dom).contains("Some text here"));
    with_dialog(&dom, |d| assert_eq!(d.state(), DialogState::Closed));
}

fn OpenDialogApp() -> Element {
    let disclosure = use_disclosure_with(DialogState::Open);

    rsx! {
        ModalForm { disclosure, title: "Business owners".to_string() }
    }
}

#[test]
fn open_dialog_shows_title_body_and_close_controls() {
    let html = render(OpenDialogApp);

    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains("Business owners</h2>"));
    assert!(html.contains("Some text here"));
    assert!(html.contains(r#"aria-label="Close""#));
    assert!(html.contains("Close</button>"));
}

fn ClosedDialogApp() -> Element {
    let disclosure = use_disclosure();

    rsx! {
        div { class: "host",
            ModalForm { disclosure, title: "Hidden".to_string() }
        }
    }
}

#[test]
fn closed_dialog_renders_nothing() {
    let html = render(ClosedDialogApp);

    assert!(!html.contains("Hidden"));
    assert!(!html.contains("modal-overlay"));
}

// ============================================================================
// Image slot
// ============================================================================

fn NoImageCountingApp() -> Element {
    use_context_provider(|| ImageProvider::new(CountingImage));

    rsx! {
        ContactCard {
            title: "Volunteer".to_string(),
            blurb: "Join us".to_string(),
            public_id: "".to_string(),
            cloud_name: "demo".to_string(),
            variant: CardVariant::Mailto { email: "a@b.org".to_string() },
        }
    }
}

#[test]
fn empty_public_id_never_calls_renderer() {
    IMAGE_CALLS.with(|calls| calls.set(0));
    let html = render(NoImageCountingApp);

    assert!(html.contains("No image available"));
    assert!(!html.contains("counted-image"));
    assert_eq!(IMAGE_CALLS.with(Cell::get), 0);
}

fn ImageCountingApp() -> Element {
    use_context_provider(|| ImageProvider::new(CountingImage));

    rsx! {
        ContactCard {
            title: "Team".to_string(),
            blurb: "Say hi".to_string(),
            public_id: "team/photo".to_string(),
            cloud_name: "demo".to_string(),
            variant: CardVariant::Mailto { email: "a@b.org".to_string() },
        }
    }
}

#[test]
fn public_id_is_delegated_to_injected_renderer() {
    IMAGE_CALLS.with(|calls| calls.set(0));
    let html = render(ImageCountingApp);

    assert!(html.contains("demo/team/photo"));
    assert!(!html.contains("No image available"));
    assert_eq!(IMAGE_CALLS.with(Cell::get), 1);
}

fn VolunteerImageApp() -> Element {
    use_context_provider(|| ImageProvider::new(CountingImage));

    rsx! {
        ContactCard {
            title: "Volunteer".to_string(),
            blurb: "Join us".to_string(),
            public_id: "team/photo".to_string(),
            cloud_name: "demo".to_string(),
        }
    }
}

#[test]
fn volunteer_card_drops_cloud_name() {
    let html = render(VolunteerImageApp);

    assert!(html.contains("none/team/photo"));
}

fn DefaultRendererApp() -> Element {
    rsx! {
        CardImage {
            public_id: "team/photo".to_string(),
            cloud_name: "demo".to_string(),
        }
    }
}

#[test]
fn default_renderer_uses_cloudinary() {
    let html = render(DefaultRendererApp);

    assert!(html.contains(r#"src="https://res.cloudinary.com/demo/image/upload/team/photo""#));
}

// ============================================================================
// Theme
// ============================================================================

fn ThemedApp() -> Element {
    use_context_provider(|| {
        let mut theme = Theme::default();
        theme.fonts.heading = "Test Heading Font".to_string();
        theme.font_sizes.paragraph = "19px".to_string();
        theme
    });

    rsx! {
        CardContent {
            title: "".to_string(),
            blurb: "".to_string(),
        }
    }
}

#[test]
fn content_reads_theme_tokens_and_keeps_text_band() {
    let html = render(ThemedApp);

    assert!(html.contains("Test Heading Font"));
    assert!(html.contains("font-size: 19px;"));
    assert!(html.contains("background-color: #001514;"));
    assert!(html.contains("card-title"));
    assert!(html.contains("card-blurb"));
}
