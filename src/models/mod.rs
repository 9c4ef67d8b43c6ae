mod chat;
mod event;
mod forward;
mod notification;
pub mod schema;
mod vendor;

pub use chat::{ChatMessage, Sender};
pub use event::EventType;
pub use forward::{ForwardedRequest, ForwardedResponse, OutboundRequest, UpstreamResponse};
pub use notification::{NotificationPayload, NotificationReceipt};
pub use schema::{VendorInsert, VendorRow, VendorUpdate, VendorsTable};
pub use vendor::{Vendor, VendorChecklistItem};
