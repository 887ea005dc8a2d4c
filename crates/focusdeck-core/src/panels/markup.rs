//! Static markup fragments for each panel.
//!
//! These are the construct-once templates the registry caches. Catalog
//! grids are not part of the fragment -- they are re-rendered per show and
//! stored alongside (see `PanelView::grid`).

use super::Panel;

fn section(class: &str, title: &str, subtitle: &str, body: &str) -> String {
    format!(
        "<div class=\"{class}\">\n\
         <button class=\"back-btn\">Back to Dashboard</button>\n\
         <div class=\"section-header\"><h1>{title}</h1><p>{subtitle}</p></div>\n\
         {body}\n\
         </div>"
    )
}

pub fn build(panel: Panel) -> String {
    match panel {
        // The shell itself has no constructed subtree; the registry never
        // asks for it.
        Panel::Dashboard => String::new(),
        Panel::DayPlanner => section(
            "planner-container",
            "Day Planner",
            "Organize your daily schedule and track your tasks",
            "<div class=\"task-form\"><h3>Add New Task</h3>\
             <input id=\"taskTitle\" placeholder=\"Enter task title\"/>\
             <select id=\"taskPriority\"><option>low</option><option>medium</option><option>high</option></select>\
             <input id=\"taskStart\" type=\"time\"/><input id=\"taskEnd\" type=\"time\"/>\
             <textarea id=\"taskDescription\" rows=\"3\"></textarea>\
             <button class=\"btn-primary\">Add Task</button></div>\
             <div class=\"task-list\" id=\"taskList\"></div>",
        ),
        Panel::WaterReminder => section(
            "water-container",
            "Water Reminder",
            "Stay hydrated with smart notifications",
            "<div class=\"water-glass\"><div class=\"water-fill\" id=\"waterFill\"></div></div>\
             <div class=\"water-controls\">\
             <input id=\"waterInterval\" type=\"number\" value=\"60\" min=\"15\" max=\"180\"/>\
             <button class=\"btn-primary\">Start Reminder</button>\
             <button class=\"btn-primary\">Stop Reminder</button>\
             <button class=\"btn-primary\">I Drank Water</button></div>\
             <div class=\"water-stats\">\
             <span id=\"glassesToday\">0</span><span id=\"totalWater\">0</span>\
             <span id=\"nextReminder\">--:--</span></div>",
        ),
        Panel::StudyLibrary => section(
            "library-container",
            "Study Library",
            "Access free programming books and educational resources",
            "<div class=\"library-grid\" id=\"libraryGrid\"></div>",
        ),
        Panel::FocusMode => section(
            "focus-container",
            "Focus Mode",
            "Concentrate with ambient sounds and productivity music",
            "<div class=\"focus-timer\" id=\"focusTimer\">25:00</div>\
             <div class=\"focus-controls\">\
             <button class=\"btn-primary\">Start Focus</button>\
             <button class=\"btn-primary\">Pause</button>\
             <button class=\"btn-primary\">Reset</button></div>\
             <div class=\"sound-options\">\
             <div class=\"sound-card\" data-sound=\"rain\">Rain</div>\
             <div class=\"sound-card\" data-sound=\"forest\">Forest</div>\
             <div class=\"sound-card\" data-sound=\"ocean\">Ocean</div>\
             <div class=\"sound-card\" data-sound=\"cafe\">Cafe</div></div>",
        ),
        Panel::GamingZone => section(
            "games-container",
            "Gaming Zone",
            "Relax with fun games and brain teasers",
            "<div class=\"games-grid\" id=\"gamesGrid\"></div>",
        ),
        Panel::AiTools => section(
            "ai-container",
            "AI Tools",
            "Access powerful AI tools for learning and productivity",
            "<div class=\"ai-grid\" id=\"aiGrid\"></div>",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_panel_fragment_carries_back_affordance() {
        for panel in Panel::all() {
            if panel == Panel::Dashboard {
                continue;
            }
            let fragment = build(panel);
            assert!(fragment.contains("back-btn"), "{panel} lacks back button");
            assert!(fragment.contains("section-header"));
        }
    }

    #[test]
    fn dashboard_has_no_fragment() {
        assert!(build(Panel::Dashboard).is_empty());
    }
}
