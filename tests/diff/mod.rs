mod diff_staged_against_head;
mod diff_working_tree_against_staged;
