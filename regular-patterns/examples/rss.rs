//! Extracts the items of an RSS feed.
//!
//! ```sh
//! cargo run --example rss
//! cargo run --example rss -- feed.xml
//! ```
use std::{
    env, fs,
    io::{self, Write},
};

use regular_patterns::{Interval, Matcher, OptionIntervalExt, Pattern};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">
<channel>
  <title>W3Schools Home Page</title>
  <link>https://www.w3schools.com</link>
  <description>Free web building tutorials</description>
  <item>
    <title>RSS Tutorial</title>
    <link>https://www.w3schools.com/xml/xml_rss.asp</link>
    <description>New RSS tutorial on W3Schools</description>
  </item>
  <item>
    <title>XML Tutorial</title>
    <link>https://www.w3schools.com/xml</link>
    <description>New XML tutorial on W3Schools</description>
  </item>
</channel>
</rss>"#;

struct Tag {
    open: Matcher,
    close: Matcher,
}

impl Tag {
    fn new(name: &str) -> Result<Self, regular_patterns::CompileError> {
        Ok(Self {
            open: Matcher::new([Pattern::text(format!("<{name}>")).ignore_case(true).call()])?,
            close: Matcher::new([Pattern::text(format!("</{name}>")).ignore_case(true).call()])?,
        })
    }

    /// The content of the first tag in `scope` that starts at or after `after`.
    fn content<'h>(&self, scope: &Interval<'h>, after: Option<&Interval<'h>>) -> Option<Interval<'h>> {
        let open = match after {
            Some(prev) => scope.find_after(prev, &self.open),
            None => scope.find(&self.open),
        };
        open.between(&self.close)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let feed = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => FEED.to_owned(),
    };

    let item = Matcher::new([
        Pattern::text("<item>").ignore_case(true).call(),
        Pattern::ANY,
        Pattern::text("</item>").ignore_case(true).call(),
    ])?;
    let title = Tag::new("title")?;
    let link = Tag::new("link")?;
    let description = Tag::new("description")?;

    let mut out = io::stdout().lock();
    for item in item.find_iter(feed.as_str()) {
        let t = title.content(&item, None);
        let l = link.content(&item, t.as_ref());
        let d = description.content(&item, l.as_ref().or(t.as_ref()));
        writeln!(out, "Title: {}", t.as_str())?;
        writeln!(out, "Link: {}", l.as_str())?;
        writeln!(out, "Description: {}", d.as_str())?;
        writeln!(out)?;
    }
    Ok(())
}
