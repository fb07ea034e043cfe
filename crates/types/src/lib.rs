//! Typed bindings for the wire format of a Stripe-style billing API:
//! subscriptions with their nested sub-objects, and billing portal
//! sessions.
//!
//! Payloads decode through [`decode`]/[`decode_slice`] into immutable
//! records and encode back losslessly through [`encode`]. Optional fields
//! that are absent or `null` on the wire stay unset in memory, closed
//! enumerations reject unknown literals, timestamps are absolute instants
//! decoded from epoch seconds, percentages keep their exact decimal
//! digits, and [`Expandable`] relation fields accept both the bare
//! identifier and the embedded record.
//!
//! Decoding is a pure function over the payload and the static schema, so
//! independent payloads can be decoded concurrently without any
//! synchronization. Transport, authentication, retries and pagination are
//! deliberately out of scope.

pub mod accounts;
pub mod billing_portal;
pub mod common;
pub mod customers;
pub mod discounts;
pub mod expandable;
pub mod invoices;
pub mod payment_methods;
pub mod prices;
pub mod setup_intents;
pub mod subscriptions;
pub mod tax_rates;
pub mod wire;

pub use crate::accounts::Account;
pub use crate::billing_portal::{BillingPortalSession, CreateBillingPortalSessionRequest};
pub use crate::common::{List, Metadata};
pub use crate::customers::Customer;
pub use crate::discounts::{Coupon, Discount};
pub use crate::expandable::{Expandable, Identified};
pub use crate::invoices::{CollectionMethod, Invoice, InvoiceStatus};
pub use crate::payment_methods::{Card, PaymentMethod, Source};
pub use crate::prices::{PlanInterval, Price, Recurring};
pub use crate::setup_intents::SetupIntent;
pub use crate::subscriptions::{
    PaymentBehavior, PaymentMethodType, PauseCollectionBehavior, ProrationBehavior,
    RequestThreeDSecure, Subscription, SubscriptionItem, SubscriptionSchedule,
    SubscriptionStatus, UpdateSubscriptionRequest,
};
pub use crate::tax_rates::TaxRate;
pub use crate::wire::{
    DecodeError, EncodeError, FromWire, Maybe, WireObject, decode, decode_slice, encode,
    encode_vec,
};
