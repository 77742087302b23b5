use crate::crawler::robots::robots_txt_matcher::RobotsTxtMatcher;
use robots_txt::Robots;

/// Parsed view over a robots.txt source, bound to one user agent.
#[derive(Clone)]
pub struct RobotsTxtView<'a> {
    robot: Robots<'a>,
    agent: String,
}

impl<'a> RobotsTxtView<'a> {
    pub fn new(robot: Robots<'a>, agent: String) -> Self {
        Self { robot, agent }
    }

    pub fn matcher(&self) -> RobotsTxtMatcher<'_> {
        let matcher = robots_txt::matcher::SimpleMatcher::new(
            &self.robot.choose_section(self.agent.as_str()).rules,
        );
        RobotsTxtMatcher::new(matcher)
    }
}
