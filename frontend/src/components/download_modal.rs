use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config;
use crate::utils::listener::ListenerHandle;

#[derive(Properties, PartialEq)]
pub struct DownloadModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Could not set body overflow: {:?}", e);
        }
    }
}

/// APK install instructions for visitors who are not on Android.
#[function_component(DownloadModal)]
pub fn download_modal(props: &DownloadModalProps) -> Html {
    let dialog_ref = use_node_ref();

    // While open: Escape closes, body scroll is locked, dialog takes focus.
    {
        let on_close = props.on_close.clone();
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    set_body_overflow("hidden");
                    if let Some(dialog) = dialog_ref.cast::<HtmlElement>() {
                        let _ = dialog.focus();
                    }
                    ListenerHandle::on_document("keydown", move |event| {
                        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                            if key_event.key() == "Escape" {
                                on_close.emit(());
                            }
                        }
                    })
                } else {
                    None
                };
                let locked = *open;
                move || {
                    drop(listener);
                    if locked {
                        set_body_overflow("");
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog never reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let steps: [Html; 4] = [
        html! { {"Download the APK file to your computer"} },
        html! { {"Transfer the APK to your Android device (USB, email, or cloud)"} },
        html! {
            <>
                {"On your device, go to "}
                <strong>{"Settings → Security → Unknown Sources"}</strong>
                {" and enable it"}
            </>
        },
        html! { {"Navigate to the APK file and tap to install"} },
    ];

    let modal_css = r#"
        .modal-backdrop {
            position: fixed;
            inset: 0;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 1rem;
            background: rgba(18, 18, 18, 0.5);
            backdrop-filter: blur(4px);
            animation: fadeIn 0.3s ease;
        }
        .modal-dialog {
            background: #fff;
            border-radius: 1.5rem;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            max-width: 32rem;
            width: 100%;
            padding: 2rem;
            outline: none;
            animation: scaleIn 0.3s ease;
        }
        .modal-header {
            display: flex;
            align-items: center;
            justify-content: space-between;
            margin-bottom: 1.5rem;
        }
        .modal-header h2 {
            font-size: 1.5rem;
            color: #121212;
        }
        .modal-close {
            background: none;
            border: none;
            padding: 0.5rem;
            border-radius: 9999px;
            cursor: pointer;
            color: #6b7280;
        }
        .modal-close:hover { background: #f5f7f6; }
        .modal-close svg { width: 1.5rem; height: 1.5rem; }
        .modal-android {
            width: 5rem;
            height: 5rem;
            margin: 0 auto 1.5rem;
            border-radius: 1rem;
            background: rgba(34, 164, 93, 0.1);
            color: #22a45d;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .modal-android svg { width: 3rem; height: 3rem; }
        .modal-intro {
            color: #6b7280;
            text-align: center;
            margin-bottom: 1rem;
        }
        .modal-steps {
            list-style: none;
            padding: 0;
            margin: 0 0 2rem;
        }
        .modal-steps li {
            display: flex;
            align-items: flex-start;
            gap: 0.75rem;
            margin-bottom: 0.75rem;
            color: #121212;
        }
        .modal-step-number {
            flex-shrink: 0;
            width: 1.5rem;
            height: 1.5rem;
            border-radius: 9999px;
            background: #22a45d;
            color: #fff;
            font-size: 0.875rem;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .modal-warning {
            display: flex;
            gap: 0.75rem;
            background: #fffbeb;
            border: 1px solid #fde68a;
            border-radius: 1rem;
            padding: 1rem;
            margin-bottom: 1.5rem;
            color: #92400e;
            font-size: 0.875rem;
        }
        .modal-warning svg {
            flex-shrink: 0;
            width: 1.25rem;
            height: 1.25rem;
            color: #f59e0b;
        }
        .modal-download {
            width: 100%;
            justify-content: center;
        }
    "#;

    html! {
        <div
            class="modal-backdrop"
            onclick={close_click.clone()}
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
        >
            <style>{modal_css}</style>
            <div ref={dialog_ref} class="modal-dialog" tabindex="-1" onclick={keep_open}>
                <div class="modal-header">
                    <h2 id="modal-title">{format!("Download {} APK", config::SITE_NAME)}</h2>
                    <button class="modal-close" onclick={close_click} aria-label="Close modal">
                        <SvgIcon icon={Icon::Close} />
                    </button>
                </div>

                <div class="modal-android">
                    <SvgIcon icon={Icon::Android} />
                </div>

                <p class="modal-intro">
                    {"Since you're on a desktop, follow these steps to install on your Android device:"}
                </p>
                <ol class="modal-steps">
                    { for steps.into_iter().enumerate().map(|(i, text)| html! {
                        <li key={i}>
                            <span class="modal-step-number">{i + 1}</span>
                            <span>{text}</span>
                        </li>
                    }) }
                </ol>

                <div class="modal-warning">
                    <SvgIcon icon={Icon::Warning} />
                    <p>{format!(
                        "Only install from the official {} website. Verify the APK signature before installation.",
                        config::SITE_NAME
                    )}</p>
                </div>

                <a
                    href={config::apk_download_url()}
                    download={config::APK_FILE_NAME}
                    class="btn-primary modal-download"
                    aria-label={format!("Download {} APK file", config::SITE_NAME)}
                >
                    <SvgIcon icon={Icon::Download} class={classes!("btn-icon")} />
                    {"Download APK"}
                </a>
            </div>
        </div>
    }
}
