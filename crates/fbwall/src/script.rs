//! Client-side companion script
//!
//! Clicking `a.showComments` / `a.showLikes` inside `#fb-wall` toggles the
//! `.comments` / `.likes` block of the enclosing `.fb-post`.

/// Dependency-free toggle script for rendered walls
pub const WALL_SCRIPT: &str = r#"(function () {
  'use strict';
  var DURATION = 300;

  function toggle(block) {
    if (block.hidden) {
      block.style.opacity = '0';
      block.hidden = false;
      window.requestAnimationFrame(function () {
        block.style.transition = 'opacity ' + DURATION + 'ms';
        block.style.opacity = '1';
      });
    } else {
      block.style.transition = 'opacity ' + DURATION + 'ms';
      block.style.opacity = '0';
      window.setTimeout(function () { block.hidden = true; }, DURATION);
    }
  }

  function bind(wall, trigger, target) {
    wall.addEventListener('click', function (e) {
      var link = e.target.closest('a.' + trigger);
      if (!link || !wall.contains(link)) { return; }
      e.preventDefault();
      var post = link.closest('.fb-post');
      var block = post && post.querySelector('.' + target);
      if (block) { toggle(block); }
    });
  }

  function init() {
    var wall = document.getElementById('fb-wall');
    if (!wall) { return; }
    bind(wall, 'showComments', 'comments');
    bind(wall, 'showLikes', 'likes');
  }

  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', init);
  } else {
    init();
  }
})();
"#;

/// Wrap rendered posts in the `#fb-wall` container followed by the script
pub fn embed_page(wall_html: &str) -> String {
    format!(
        "<div id=\"fb-wall\">{}</div>\n<script>\n{}</script>\n",
        wall_html, WALL_SCRIPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_targets_rendered_classes() {
        for needle in ["fb-wall", "showComments", "showLikes", ".fb-post", "'comments'", "'likes'"] {
            assert!(WALL_SCRIPT.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_embed_page() {
        let page = embed_page("<section>x</section>");
        assert!(page.starts_with(r#"<div id="fb-wall"><section>x</section></div>"#));
        assert!(page.contains("<script>"));
        assert!(page.trim_end().ends_with("</script>"));
    }
}
