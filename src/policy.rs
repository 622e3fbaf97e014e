//! Polkit authorization descriptor
//!
//! pkexec only runs the helper if a policy maps an action to its absolute
//! path through `org.freedesktop.policykit.exec.path`. Install the output of
//! `omen-rgb policy` to `/usr/share/polkit-1/actions/<action id>.policy`.

/// Polkit action id for applying colors
pub const POLKIT_ACTION: &str = "com.github.cousteauche.omenrgbgui.applyrgb";

/// Installed location of the helper; must match the policy
pub const HELPER_PATH: &str = "/usr/local/bin/omen-rgb-helper";

/// Render the polkit policy mapping `action_id` to `helper_path`
pub fn render_policy(action_id: &str, helper_path: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE policyconfig PUBLIC
 "-//freedesktop//DTD PolicyKit Policy Configuration 1.0//EN"
 "http://www.freedesktop.org/standards/PolicyKit/1/policyconfig.dtd">
<policyconfig>
  <vendor>omen-rgb</vendor>
  <action id="{action_id}">
    <description>Set HP Omen keyboard backlight colors</description>
    <message>Authentication is required to change the keyboard backlight</message>
    <defaults>
      <allow_any>auth_admin</allow_any>
      <allow_inactive>auth_admin</allow_inactive>
      <allow_active>auth_admin_keep</allow_active>
    </defaults>
    <annotate key="org.freedesktop.policykit.exec.path">{helper_path}</annotate>
  </action>
</policyconfig>
"#,
        action_id = xml_escape(action_id),
        helper_path = xml_escape(helper_path),
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_maps_action_to_helper() {
        let xml = render_policy(POLKIT_ACTION, HELPER_PATH);
        assert!(xml.contains(r#"<action id="com.github.cousteauche.omenrgbgui.applyrgb">"#));
        assert!(xml.contains(
            r#"<annotate key="org.freedesktop.policykit.exec.path">/usr/local/bin/omen-rgb-helper</annotate>"#
        ));
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn test_policy_escapes_values() {
        let xml = render_policy("a\"b", "/opt/<x>&y");
        assert!(xml.contains(r#"id="a&quot;b""#));
        assert!(xml.contains("/opt/&lt;x&gt;&amp;y"));
    }
}
