use crate::client::ProductApi;
use crate::product::{Field, FormErrors, FormValues};
use crate::submission::{SubmissionState, submit_product};
use crate::widgets::{Feedback, SelectField, TextField};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The live DOM elements of the form. Values are read from here on submit,
/// not from cached state.
#[derive(Clone, Copy)]
struct FormRefs {
    form: NodeRef<html::Form>,
    name: NodeRef<html::Input>,
    size: NodeRef<html::Input>,
    kind: NodeRef<html::Select>,
    submit: NodeRef<html::Button>,
}

impl FormRefs {
    fn new() -> Self {
        FormRefs {
            form: NodeRef::new(),
            name: NodeRef::new(),
            size: NodeRef::new(),
            kind: NodeRef::new(),
            submit: NodeRef::new(),
        }
    }

    fn read_values(&self) -> FormValues {
        FormValues {
            name: self.name.get().map(|input| input.value()).unwrap_or_default(),
            size: self.size.get().map(|input| input.value()).unwrap_or_default(),
            kind: self.kind.get().map(|select| select.value()).unwrap_or_default(),
        }
    }

    /// The `disabled` attribute only follows the state on the next tick,
    /// but the button has to be unusable before the request goes out.
    fn disable_submit(&self) {
        if let Some(button) = self.submit.get() {
            button.set_disabled(true);
        }
    }

    fn reset(&self) {
        match self.form.get() {
            Some(form) => form.reset(),
            None => warn!("form element is gone, nothing to reset"),
        }
    }
}

/// The create-product page: three fields, a submit button and the submission feedback.
///
/// Every submit posts the values, even when some are missing; the inline
/// errors are informative only.
#[component]
pub fn ProductForm<A>(api: A) -> impl IntoView
where
    A: ProductApi + Clone + 'static,
{
    let refs = FormRefs::new();
    let errors = RwSignal::new(FormErrors::default());
    let state = RwSignal::new(SubmissionState::default());

    let on_blur = Callback::new(move |(field, value): (Field, String)| {
        errors.update(|errors| errors.check(field, &value));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // disable the button before anything else happens
        state.update(SubmissionState::begin);
        refs.disable_submit();

        let values = refs.read_values();
        let missing = FormErrors::validate_all(&values);
        if !missing.is_empty() {
            warn!("submitting with missing fields: {missing:?}");
        }
        errors.set(missing);
        log!("submitting {values:?}");

        let api = api.clone();
        spawn_local(async move {
            let outcome = submit_product(&api, &values).await;
            if outcome.is_ok() {
                refs.reset();
            }
            state.update(|state| state.settle(&outcome));
        });
    };

    let error_of = move |field: Field| {
        Signal::derive(move || errors.with(|errors| errors.message(field).map(str::to_string)))
    };

    view! {
        <h1>"create product"</h1>
        <form node_ref=refs.form on:submit=on_submit novalidate>
            <TextField field=Field::Name error=error_of(Field::Name) node_ref=refs.name on_blur />
            <TextField field=Field::Size error=error_of(Field::Size) node_ref=refs.size on_blur />
            <SelectField field=Field::Type error=error_of(Field::Type) node_ref=refs.kind on_blur />
            <button
                type="submit"
                node_ref=refs.submit
                disabled=move || state.with(|state| state.is_saving)
            >
                "submit"
            </button>
        </form>
        <Feedback
            success=Signal::derive(move || state.with(SubmissionState::success_message))
            error=Signal::derive(move || state.with(|state| state.error_message.clone()))
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::client::{ApiResponse, ClientError};
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Clone)]
    enum TestApi {
        Answer(u16, &'static str),
        /// the request never produces a response
        Offline,
        /// answers 201 once the sender side is fired or dropped
        Held(Rc<RefCell<Option<oneshot::Receiver<()>>>>),
    }

    impl ProductApi for TestApi {
        async fn create_product(&self, _: &FormValues) -> Result<ApiResponse, ClientError> {
            match self {
                TestApi::Answer(status, body) => Ok(ApiResponse {
                    status: *status,
                    body: Some(body.to_string()),
                }),
                TestApi::Offline => {
                    // an unparsable URL fails inside reqwest without touching the network
                    let e = reqwest::Client::new()
                        .post("not a url")
                        .send()
                        .await
                        .unwrap_err();
                    Err(ClientError::Transport(e))
                }
                TestApi::Held(release) => {
                    let release = release.borrow_mut().take();
                    if let Some(release) = release {
                        let _ = release.await;
                    }
                    Ok(ApiResponse {
                        status: 201,
                        body: Some(String::new()),
                    })
                }
            }
        }
    }

    fn mount(api: TestApi) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();
        leptos::mount::mount_to(root.clone(), move || view! { <ProductForm api /> }).forget();
        root
    }

    fn element<T: JsCast>(root: &HtmlElement, selector: &str) -> T {
        root.query_selector(selector).unwrap().unwrap().unchecked_into()
    }

    fn text(root: &HtmlElement) -> String {
        root.text_content().unwrap_or_default()
    }

    async fn settle() {
        for _ in 0..4 {
            leptos::task::tick().await;
        }
    }

    async fn blur(root: &HtmlElement, selector: &str) {
        let field: HtmlElement = element(root, selector);
        field.focus().unwrap();
        field.blur().unwrap();
        settle().await;
    }

    #[wasm_bindgen_test]
    async fn test_blur_empty_name_shows_error() {
        let root = mount(TestApi::Answer(201, ""));
        assert!(!text(&root).contains("The name is required"));
        blur(&root, "#name").await;
        assert!(text(&root).contains("The name is required"));
        assert!(!text(&root).contains("The size is required"));
    }

    #[wasm_bindgen_test]
    async fn test_blur_empty_size_shows_error() {
        let root = mount(TestApi::Answer(201, ""));
        assert!(!text(&root).contains("The size is required"));
        blur(&root, "#size").await;
        assert!(text(&root).contains("The size is required"));
        assert!(!text(&root).contains("The name is required"));
    }

    #[wasm_bindgen_test]
    async fn test_blur_empty_type_shows_error() {
        let root = mount(TestApi::Answer(201, ""));
        assert!(!text(&root).contains("The type is required"));
        blur(&root, "#type").await;
        assert!(text(&root).contains("The type is required"));

        element::<HtmlSelectElement>(&root, "#type").set_value("furniture");
        blur(&root, "#type").await;
        assert!(!text(&root).contains("The type is required"));
    }

    #[wasm_bindgen_test]
    async fn test_button_disabled_while_request_in_flight() {
        let (release, held) = oneshot::channel();
        let root = mount(TestApi::Held(Rc::new(RefCell::new(Some(held)))));
        let button: HtmlButtonElement = element(&root, "button");
        assert!(!button.disabled());

        button.click();
        assert!(button.disabled());
        settle().await;
        assert!(button.disabled());

        release.send(()).unwrap();
        settle().await;
        assert!(!button.disabled());
        assert!(text(&root).contains("product stored"));
    }

    #[wasm_bindgen_test]
    async fn test_created_resets_fields() {
        let root = mount(TestApi::Answer(201, ""));
        element::<HtmlInputElement>(&root, "#name").set_value("my product");
        element::<HtmlInputElement>(&root, "#size").set_value("10");
        element::<HtmlSelectElement>(&root, "#type").set_value("electronic");
        let button: HtmlButtonElement = element(&root, "button");
        button.click();
        settle().await;
        assert!(text(&root).contains("product stored"));
        assert!(!button.disabled());
        assert_eq!(element::<HtmlInputElement>(&root, "#name").value(), "");
        assert_eq!(element::<HtmlInputElement>(&root, "#size").value(), "");
        assert_eq!(element::<HtmlSelectElement>(&root, "#type").value(), "");
    }

    #[wasm_bindgen_test]
    async fn test_empty_submit_shows_every_error() {
        let root = mount(TestApi::Answer(
            400,
            r#"{"message":"The form is invalid, the fields name, size, type are required"}"#,
        ));
        element::<HtmlButtonElement>(&root, "button").click();
        settle().await;
        let shown = text(&root);
        assert!(shown.contains("The name is required"));
        assert!(shown.contains("The size is required"));
        assert!(shown.contains("The type is required"));
        assert!(shown.contains("The form is invalid, the fields name, size, type are required"));
    }

    #[wasm_bindgen_test]
    async fn test_server_error_message() {
        let root = mount(TestApi::Answer(500, ""));
        element::<HtmlButtonElement>(&root, "button").click();
        settle().await;
        assert!(text(&root).contains("Unexpected error, please try again"));
    }

    #[wasm_bindgen_test]
    async fn test_connection_error_message() {
        let root = mount(TestApi::Offline);
        let button: HtmlButtonElement = element(&root, "button");
        button.click();
        button.click();
        settle().await;
        let shown = text(&root);
        assert!(shown.contains("connection error, please try later"));
        assert_eq!(shown.matches("connection error").count(), 1);
        assert!(!button.disabled());
    }
}
