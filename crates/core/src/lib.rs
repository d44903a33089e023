pub mod annotation {
    pub mod domain {
        pub mod annotation_renderer;
        pub mod annotations;
    }
    pub mod infrastructure;
}

pub mod detection {
    pub mod domain {
        pub mod die_locator;
        pub mod grayscale;
        pub mod pip_counter;
    }
    pub mod infrastructure;
}

pub mod imaging {
    pub mod domain {
        pub mod image_reader;
        pub mod image_viewer;
        pub mod image_writer;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod count_pips_use_case;
    pub mod pipeline_logger;
}

pub mod shared {
    pub mod constants;
    pub mod die_candidate;
    pub mod error;
    pub mod moments;
    #[cfg(test)]
    pub(crate) mod test_images;
}
