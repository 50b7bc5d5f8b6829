/// Decides whether a notification is worth sending. `--send-on-empty`
/// overrides everything; otherwise an empty alerts list and a non-positive
/// new-alerts count each independently suppress the send.
pub fn should_send(alerts_is_empty: bool, new_alerts: i64, send_on_empty: bool) -> bool {
    if send_on_empty {
        return true;
    }
    if alerts_is_empty {
        return false;
    }
    new_alerts > 0
}

#[cfg(test)]
mod tests {
    use super::should_send;

    #[test]
    fn empty_alerts_suppress_unless_overridden() {
        assert!(!should_send(true, 5, false));
        assert!(should_send(true, 5, true));
        assert!(should_send(true, 0, true));
    }

    #[test]
    fn zero_new_alerts_suppress_even_with_alerts_present() {
        assert!(!should_send(false, 0, false));
        assert!(!should_send(false, -2, false));
        assert!(should_send(false, 0, true));
    }

    #[test]
    fn sends_when_alerts_present_and_new() {
        assert!(should_send(false, 1, false));
    }
}
