/// API endpoint path, resolved beneath a gateway's `/v2/` base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Selector {
    Auth,
    SmsSend,
    SmsTestSend,
    SmsStatus,
    SmsTestStatus,
    SmsList,
    SmsTestList,
    HlrCheck,
    HlrStatus,
    NumberOperator,
    Balance,
    Cards,
    Tariffs,
    SignList,
    GroupAdd,
    GroupDelete,
    GroupDeleteAll,
    GroupList,
    ContactAdd,
    ContactDelete,
    ContactDeleteAll,
    ContactList,
    BlacklistAdd,
    BlacklistList,
    BlacklistDelete,
}

impl Selector {
    pub fn path(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::SmsSend => "sms/send",
            Self::SmsTestSend => "sms/testsend",
            Self::SmsStatus => "sms/status",
            Self::SmsTestStatus => "sms/teststatus",
            Self::SmsList => "sms/list",
            Self::SmsTestList => "sms/testlist",
            Self::HlrCheck => "hlr/check",
            Self::HlrStatus => "hlr/status",
            Self::NumberOperator => "number/operator",
            Self::Balance => "balance",
            Self::Cards => "cards",
            Self::Tariffs => "tariffs",
            Self::SignList => "sign/list",
            Self::GroupAdd => "group/add",
            Self::GroupDelete => "group/delete",
            Self::GroupDeleteAll => "group/delete-all",
            Self::GroupList => "group/list",
            Self::ContactAdd => "contact/add",
            Self::ContactDelete => "contact/delete",
            Self::ContactDeleteAll => "contact/delete-all",
            Self::ContactList => "contact/list",
            Self::BlacklistAdd => "blacklist/add",
            Self::BlacklistList => "blacklist/list",
            Self::BlacklistDelete => "blacklist/delete",
        }
    }

    /// `sms/send`, or the sandbox `sms/testsend` in test mode.
    pub fn sms_send(test_mode: bool) -> Self {
        if test_mode {
            Self::SmsTestSend
        } else {
            Self::SmsSend
        }
    }

    /// `sms/status`, or the sandbox `sms/teststatus` in test mode.
    pub fn sms_status(test_mode: bool) -> Self {
        if test_mode {
            Self::SmsTestStatus
        } else {
            Self::SmsStatus
        }
    }

    /// `sms/list`, or the sandbox `sms/testlist` in test mode.
    pub fn sms_list(test_mode: bool) -> Self {
        if test_mode {
            Self::SmsTestList
        } else {
            Self::SmsList
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_variants_switch_paths() {
        assert_eq!(Selector::sms_send(false).path(), "sms/send");
        assert_eq!(Selector::sms_send(true).path(), "sms/testsend");
        assert_eq!(Selector::sms_status(false).path(), "sms/status");
        assert_eq!(Selector::sms_status(true).path(), "sms/teststatus");
        assert_eq!(Selector::sms_list(false).path(), "sms/list");
        assert_eq!(Selector::sms_list(true).path(), "sms/testlist");
    }

    #[test]
    fn hyphenated_selectors_keep_vendor_spelling() {
        assert_eq!(Selector::GroupDeleteAll.path(), "group/delete-all");
        assert_eq!(Selector::ContactDeleteAll.path(), "contact/delete-all");
    }
}
