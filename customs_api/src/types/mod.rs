mod lookup;
pub use self::lookup::{LookupKey, LookupRequest};

mod trader;
pub use self::trader::{RawTrader, TraderRecord};
