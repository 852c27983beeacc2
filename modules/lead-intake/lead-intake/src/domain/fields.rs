/// JSON keys of the inbound contact-form payload.
pub struct ContactFields;

impl ContactFields {
    pub const FIRST_NAME: &'static str = "firstName";
    pub const LAST_NAME: &'static str = "lastName";
    pub const EMAIL: &'static str = "email";
    pub const PHONE: &'static str = "phone";
    pub const SERVICE_TYPE: &'static str = "serviceType";
    pub const MESSAGE: &'static str = "message";
    pub const ADDRESS: &'static str = "address";
    pub const PREFERRED_CONTACT: &'static str = "preferredContact";
    pub const SOURCE: &'static str = "source";
    pub const SOURCE_PAGE: &'static str = "sourcePage";
    pub const UTM_SOURCE: &'static str = "utmSource";
    pub const UTM_MEDIUM: &'static str = "utmMedium";
    pub const UTM_CAMPAIGN: &'static str = "utmCampaign";
}

/// Keys of the nested `address` object.
pub struct AddressFields;

impl AddressFields {
    pub const STREET: &'static str = "street";
    pub const CITY: &'static str = "city";
    pub const STATE: &'static str = "state";
    pub const ZIP: &'static str = "zip";
}
