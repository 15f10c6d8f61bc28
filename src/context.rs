use yew::prelude::*;

use crate::lightbox::LightboxImage;
use crate::toast::Notice;

/// App-wide affordances shared with every page.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub notify: Callback<Notice>,
    pub open_image: Callback<LightboxImage>,
}

#[hook]
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_else(|| SiteContext {
        notify: Callback::from(|notice: Notice| log::warn!("No toaster mounted: {}", notice.message)),
        open_image: Callback::from(|_: LightboxImage| ()),
    })
}
