//! Notification banner

use leptos::{prelude::*, task};

use shopfront::notices::{NOTICE_DURATION, NoticeBanner, Severity};

use crate::timers::wait_for;

/// Show `message` and schedule the banner to hide.
pub(crate) fn show_notice(banner: RwSignal<NoticeBanner>, message: String, severity: Severity) {
    banner.update(|banner| banner.show(message, severity));

    task::spawn_local(async move {
        wait_for(NOTICE_DURATION).await;

        // Not tied to this notice: a newer one is hidden as well.
        banner.update(NoticeBanner::hide);
    });
}

/// Transient banner at the top of the page.
#[component]
pub fn NotificationBanner(banner: RwSignal<NoticeBanner>) -> impl IntoView {
    view! {
        {move || banner.with(|banner| match banner.visible_notice() {
            Some(notice) => view! {
                <div id="notification" class=notice.severity.class() style="display: flex">
                    <i class=notice.severity.icon()></i>
                    " "
                    {notice.message.clone()}
                </div>
            }
            .into_any(),
            None => view! { <div id="notification" style="display: none"></div> }.into_any(),
        })}
    }
}
